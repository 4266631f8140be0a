use crate::config::AppConfig;
use crate::scene::components::*;
use crate::scene::logic::{build_particle_mesh, liquid_column, sample_particles, thermometer_x};
use bevy::color::LinearRgba;
use bevy::prelude::*;
use std::f32::consts::PI;
use thermoconv::TemperatureScale;

const TUBE_RADIUS: f32 = 0.2;
const TUBE_HEIGHT: f32 = 5.0;
const BULB_RADIUS: f32 = 0.5;
const BULB_Y: f32 = -3.0;
const LIQUID_RADIUS: f32 = 0.15;
const BASE_Y: f32 = -4.0;
const PLATFORM_RADIUS: f32 = 8.0;
const PLATFORM_Y: f32 = -5.0;

pub fn spawn_lights(mut commands: Commands, config: Res<AppConfig>) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 400.0,
        ..default()
    });

    commands.spawn((
        PointLight {
            intensity: 2_000_000.0,
            range: 100.0,
            shadows_enabled: config.scene.shadows,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 10.0),
    ));

    commands.spawn((
        SpotLight {
            intensity: 4_000_000.0,
            range: 40.0,
            outer_angle: PI / 6.0,
            // three.js penumbra 0.3
            inner_angle: PI / 6.0 * 0.7,
            shadows_enabled: config.scene.shadows,
            ..default()
        },
        Transform::from_xyz(0.0, 15.0, 0.0).looking_at(Vec3::ZERO, Vec3::Z),
    ));

    info!("Lights spawned");
}

pub fn spawn_thermometers(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<AppConfig>,
) {
    let scene = &config.scene;

    let tube_mesh = meshes.add(Cylinder::new(TUBE_RADIUS, TUBE_HEIGHT));
    let bulb_mesh = meshes.add(Sphere::new(BULB_RADIUS).mesh().uv(32, 32));
    let liquid_mesh = meshes.add(Cylinder::new(LIQUID_RADIUS, 1.0));
    let mark_mesh = meshes.add(Cuboid::new(0.2, 0.05, 0.05));
    let base_mesh = meshes.add(ConicalFrustum {
        radius_top: 0.6,
        radius_bottom: 0.8,
        height: 0.4,
    });
    let label_mesh = meshes.add(Rectangle::new(2.0, 0.5));

    let tube_material = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, 0.3),
        alpha_mode: AlphaMode::Blend,
        perceptual_roughness: 0.1,
        ..default()
    });
    let mark_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        metallic: 0.5,
        perceptual_roughness: 0.2,
        ..default()
    });
    let base_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0x44, 0x44, 0x44),
        metallic: 0.7,
        perceptual_roughness: 0.2,
        ..default()
    });
    let label_material = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, 0.8),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        cull_mode: None,
        ..default()
    });

    let group = commands
        .spawn((
            Transform::default(),
            Visibility::default(),
            ThermometerGroup,
            Name::new("Thermometers"),
        ))
        .id();

    for scale in TemperatureScale::ALL {
        let x = thermometer_x(scale, scene.thermometer_spacing);

        // Liquid and bulb get their own materials; they are recolored per scale.
        let bulb = commands
            .spawn((
                Mesh3d(bulb_mesh.clone()),
                MeshMaterial3d(materials.add(glowing_material())),
                Transform::from_xyz(0.0, BULB_Y, 0.0),
                Bulb,
            ))
            .id();

        let column = liquid_column(0.0, scene.liquid_max_height, scene.liquid_base_y);
        let liquid = commands
            .spawn((
                Mesh3d(liquid_mesh.clone()),
                MeshMaterial3d(materials.add(glowing_material())),
                Transform::from_xyz(0.0, column.center_y, 0.0)
                    .with_scale(Vec3::new(1.0, column.scale_y, 1.0)),
                LiquidColumn,
            ))
            .id();

        let tube = commands
            .spawn((
                Mesh3d(tube_mesh.clone()),
                MeshMaterial3d(tube_material.clone()),
                Transform::default(),
            ))
            .id();

        let base = commands
            .spawn((
                Mesh3d(base_mesh.clone()),
                MeshMaterial3d(base_material.clone()),
                Transform::from_xyz(0.0, BASE_Y, 0.0),
            ))
            .id();

        let thermometer = commands
            .spawn((
                Transform::from_xyz(x, 0.0, 0.0),
                Visibility::default(),
                Thermometer {
                    scale,
                    liquid,
                    bulb,
                },
                Name::new(format!("{} thermometer", scale.name())),
            ))
            .add_children(&[tube, bulb, liquid, base])
            .with_children(|parent| {
                for i in -2..=2 {
                    parent.spawn((
                        Mesh3d(mark_mesh.clone()),
                        MeshMaterial3d(mark_material.clone()),
                        Transform::from_xyz(0.3, i as f32, 0.0),
                    ));
                }
            })
            .id();

        commands.entity(group).add_child(thermometer);

        commands.spawn((
            Mesh3d(label_mesh.clone()),
            MeshMaterial3d(label_material.clone()),
            Transform::from_xyz(x, scene.label_height, 0.0),
            ThermometerLabel { scale },
            Name::new(format!("{} label", scale.name())),
        ));
    }

    info!("Spawned {} thermometers", TemperatureScale::ALL.len());
}

fn glowing_material() -> StandardMaterial {
    StandardMaterial {
        base_color: Color::srgb(1.0, 0.0, 0.0),
        emissive: LinearRgba::rgb(0.2, 0.0, 0.0),
        metallic: 0.1,
        perceptual_roughness: 0.2,
        ..default()
    }
}

pub fn spawn_backdrop(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(3.0).mesh().uv(32, 32))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(1.0, 0.0, 0.0),
            emissive: LinearRgba::rgb(0.5, 0.0, 0.0),
            metallic: 0.2,
            perceptual_roughness: 0.7,
            ..default()
        })),
        Transform::from_xyz(0.0, 0.0, -5.0),
        Backdrop,
        Name::new("Backdrop"),
    ));
}

pub fn spawn_platform(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Cylinder::new(PLATFORM_RADIUS, 0.5))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0x33, 0x33, 0x44),
            metallic: 0.7,
            perceptual_roughness: 0.2,
            ..default()
        })),
        Transform::from_xyz(0.0, PLATFORM_Y, 0.0),
        Name::new("Platform"),
    ));

    // Bevy's torus already lies in the XZ plane.
    commands.spawn((
        Mesh3d(meshes.add(Torus::new(PLATFORM_RADIUS - 0.2, PLATFORM_RADIUS + 0.2))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0x44, 0x66, 0xaa),
            emissive: Color::srgb_u8(0x11, 0x22, 0x44).to_linear(),
            metallic: 0.8,
            perceptual_roughness: 0.2,
            ..default()
        })),
        Transform::from_xyz(0.0, PLATFORM_Y + 0.25, 0.0),
        Name::new("Platform ring"),
    ));
}

pub fn spawn_particle_field(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<AppConfig>,
) {
    let settings = &config.particles;
    if settings.count == 0 {
        return;
    }

    let mut rng = rand::rng();
    let particles = sample_particles(
        &mut rng,
        settings.count,
        settings.shell_inner_radius,
        settings.shell_thickness,
    );
    let mesh = build_particle_mesh(&particles, settings.size, settings.opacity);

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..default()
        })),
        Transform::default(),
        Name::new("Particle field"),
    ));

    info!("Spawned particle field with {} particles", particles.len());
}

pub fn spin_thermometer_group(
    time: Res<Time>,
    config: Res<AppConfig>,
    mut groups: Query<&mut Transform, With<ThermometerGroup>>,
) {
    let angle = config.scene.group_spin_per_second * time.delta_secs();
    for mut transform in &mut groups {
        transform.rotate_y(angle);
    }
}
