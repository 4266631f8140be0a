use crate::camera::components::{MainCamera, OrbitCamera};
use crate::camera::logic::{OrbitInput, OrbitParams, OrbitState, orbit_translation, step_orbit};
use crate::config::AppConfig;
use crate::ui::PANEL_WIDTH;
use bevy::input::ButtonInput;
use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

pub fn spawn_camera(mut commands: Commands, config: Res<AppConfig>) {
    let orbit = OrbitState::new(config.camera.distance);
    let target = Vec3::ZERO;

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: config.camera.fov_degrees.to_radians(),
            near: 0.1,
            far: 1000.0,
            ..default()
        }),
        Transform::from_translation(orbit_translation(&orbit, target)).looking_at(target, Vec3::Y),
        MainCamera,
        OrbitCamera {
            orbit,
            target,
            auto_rotate: true,
        },
    ));

    info!("Camera spawned");
}

pub fn orbit_camera_control(
    mouse_input: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut mouse_wheel: MessageReader<MouseWheel>,
    time: Res<Time>,
    config: Res<AppConfig>,
    windows: Query<&Window>,
    mut camera_q: Query<(&mut Transform, &mut OrbitCamera), With<MainCamera>>,
) {
    let Ok((mut transform, mut camera)) = camera_q.single_mut() else {
        return;
    };

    // The control panel is docked on the right edge.
    let is_over_ui = windows
        .single()
        .ok()
        .and_then(|window| {
            window
                .cursor_position()
                .map(|cursor| cursor.x > window.width() - PANEL_WIDTH)
        })
        .unwrap_or(false);

    let mut drag_delta = Vec2::ZERO;
    for ev in mouse_motion.read() {
        drag_delta += ev.delta;
    }

    let mut wheel_delta = 0.0;
    for ev in mouse_wheel.read() {
        wheel_delta += match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y / 40.0,
        };
    }

    let input = OrbitInput {
        dragging: mouse_input.pressed(MouseButton::Left) && !is_over_ui,
        drag_delta,
        wheel_delta: if is_over_ui { 0.0 } else { wheel_delta },
    };
    let params = OrbitParams {
        auto_rotate: camera.auto_rotate,
        auto_rotate_speed: config.camera.auto_rotate_speed,
        damping_factor: config.camera.damping_factor,
        drag_sensitivity: config.camera.drag_sensitivity,
        zoom_sensitivity: config.camera.zoom_sensitivity,
        min_distance: config.camera.min_distance,
        max_distance: config.camera.max_distance,
    };

    camera.orbit = step_orbit(camera.orbit, &input, &params, time.delta_secs());

    transform.translation = orbit_translation(&camera.orbit, camera.target);
    transform.look_at(camera.target, Vec3::Y);
}
