use bevy::asset::RenderAssetUsages;
use bevy::math::Vec3;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::Mesh;
use rand::Rng;
use std::f32::consts::PI;
use thermoconv::TemperatureScale;

/// A zero Y scale would collapse the liquid's normals.
const MIN_LIQUID_SCALE: f32 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiquidColumnShape {
    pub height: f32,
    pub scale_y: f32,
    pub center_y: f32,
}

/// Shape of a unit-height liquid cylinder filled to `fill` of `max_height`,
/// standing on `base_y`.
pub fn liquid_column(fill: f32, max_height: f32, base_y: f32) -> LiquidColumnShape {
    let fill = if fill.is_nan() { 0.0 } else { fill.clamp(0.0, 1.0) };
    let height = fill * max_height;
    LiquidColumnShape {
        height,
        scale_y: height.max(MIN_LIQUID_SCALE),
        center_y: base_y + height / 2.0,
    }
}

/// X position of a thermometer: Celsius left, Fahrenheit center, Kelvin right.
pub fn thermometer_x(scale: TemperatureScale, spacing: f32) -> f32 {
    (scale.index() as f32 - 1.0) * spacing
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub color: [f32; 3],
}

/// Point on a spherical shell from three uniform samples in [0, 1).
pub fn shell_point(u: f32, v: f32, w: f32, inner_radius: f32, thickness: f32) -> Vec3 {
    let radius = inner_radius + w * thickness;
    let theta = u * 2.0 * PI;
    let phi = v * PI;
    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    )
}

/// Blue/purple particle tint from three uniform samples in [0, 1).
pub fn particle_color(a: f32, b: f32, c: f32) -> [f32; 3] {
    [0.5 + a * 0.5, 0.2 + b * 0.3, 0.8 + c * 0.2]
}

pub fn sample_particles(
    rng: &mut impl Rng,
    count: usize,
    inner_radius: f32,
    thickness: f32,
) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            position: shell_point(rng.random(), rng.random(), rng.random(), inner_radius, thickness),
            color: particle_color(rng.random(), rng.random(), rng.random()),
        })
        .collect()
}

/// Merges all particles into one vertex-colored mesh of tiny octahedra,
/// so the whole field is a single draw.
pub fn build_particle_mesh(particles: &[Particle], size: f32, opacity: f32) -> Mesh {
    const CORNERS: [Vec3; 6] = [
        Vec3::X,
        Vec3::NEG_X,
        Vec3::Y,
        Vec3::NEG_Y,
        Vec3::Z,
        Vec3::NEG_Z,
    ];
    const FACES: [[u32; 3]; 8] = [
        [0, 2, 4],
        [2, 1, 4],
        [1, 3, 4],
        [3, 0, 4],
        [2, 0, 5],
        [1, 2, 5],
        [3, 1, 5],
        [0, 3, 5],
    ];

    let half = size * 0.5;
    let mut positions = Vec::with_capacity(particles.len() * CORNERS.len());
    let mut normals = Vec::with_capacity(particles.len() * CORNERS.len());
    let mut colors = Vec::with_capacity(particles.len() * CORNERS.len());
    let mut indices = Vec::with_capacity(particles.len() * FACES.len() * 3);

    for (i, particle) in particles.iter().enumerate() {
        let first = (i * CORNERS.len()) as u32;
        let [r, g, b] = particle.color;

        for corner in CORNERS {
            let p = particle.position + corner * half;
            positions.push([p.x, p.y, p.z]);
            normals.push([corner.x, corner.y, corner.z]);
            colors.push([r, g, b, opacity]);
        }
        for face in FACES {
            indices.extend(face.iter().map(|&corner| first + corner));
        }
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colors);
    mesh.insert_indices(Indices::U32(indices));

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0, -2.0)]
    #[case(0.5, 2.0, -1.0)]
    #[case(1.0, 4.0, 0.0)]
    #[case(0.25, 1.0, -1.5)]
    fn test_liquid_column(#[case] fill: f32, #[case] height: f32, #[case] center_y: f32) {
        let shape = liquid_column(fill, 4.0, -2.0);
        assert!((shape.height - height).abs() < 1e-6);
        assert!((shape.center_y - center_y).abs() < 1e-6);
    }

    #[test]
    fn test_empty_column_keeps_a_sliver_of_scale() {
        let shape = liquid_column(0.0, 4.0, -2.0);
        assert_eq!(shape.height, 0.0);
        assert!(shape.scale_y > 0.0);
    }

    #[rstest]
    #[case(-0.5)]
    #[case(1.5)]
    #[case(f32::NAN)]
    fn test_liquid_column_clamps_fill(#[case] fill: f32) {
        let shape = liquid_column(fill, 4.0, -2.0);
        assert!(shape.height >= 0.0 && shape.height <= 4.0);
    }

    #[rstest]
    #[case(TemperatureScale::Celsius, -4.0)]
    #[case(TemperatureScale::Fahrenheit, 0.0)]
    #[case(TemperatureScale::Kelvin, 4.0)]
    fn test_thermometer_x(#[case] scale: TemperatureScale, #[case] expected: f32) {
        assert_eq!(thermometer_x(scale, 4.0), expected);
    }

    #[rstest]
    #[case(0.0, 0.0, 0.0)]
    #[case(0.3, 0.7, 0.5)]
    #[case(0.99, 0.99, 0.99)]
    fn test_shell_point_stays_in_shell(#[case] u: f32, #[case] v: f32, #[case] w: f32) {
        let p = shell_point(u, v, w, 20.0, 10.0);
        let r = p.length();
        assert!(r >= 20.0 - 1e-3 && r <= 30.0 + 1e-3, "radius {}", r);
    }

    #[test]
    fn test_particle_color_ranges() {
        assert_eq!(particle_color(0.0, 0.0, 0.0), [0.5, 0.2, 0.8]);
        let [r, g, b] = particle_color(1.0, 1.0, 1.0);
        assert!((r - 1.0).abs() < 1e-6);
        assert!((g - 0.5).abs() < 1e-6);
        assert!((b - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_sample_particles_is_deterministic_per_seed() {
        let a = sample_particles(&mut StdRng::seed_from_u64(7), 50, 20.0, 10.0);
        let b = sample_particles(&mut StdRng::seed_from_u64(7), 50, 20.0, 10.0);
        assert_eq!(a.len(), 50);
        assert_eq!(a, b);
    }

    #[test]
    fn test_particle_mesh_sizes() {
        let particles = sample_particles(&mut StdRng::seed_from_u64(1), 10, 20.0, 10.0);
        let mesh = build_particle_mesh(&particles, 0.1, 0.8);

        assert_eq!(mesh.count_vertices(), 60);
        let Some(Indices::U32(indices)) = mesh.indices() else {
            panic!("expected u32 indices");
        };
        assert_eq!(indices.len(), 10 * 8 * 3);
        assert!(indices.iter().all(|&i| i < 60));
    }
}
