use bevy::math::{Vec2, Vec3};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Keeps the camera from flipping over the poles.
const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.05;

/// Spherical position of the camera around its target plus pending motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    pub yaw: f32,
    pub pitch: f32,
    pub radius: f32,
    pub yaw_velocity: f32,
    pub pitch_velocity: f32,
}

impl OrbitState {
    pub fn new(radius: f32) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            radius,
            yaw_velocity: 0.0,
            pitch_velocity: 0.0,
        }
    }
}

pub struct OrbitInput {
    pub dragging: bool,
    pub drag_delta: Vec2,
    pub wheel_delta: f32,
}

pub struct OrbitParams {
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
    pub damping_factor: f32,
    pub drag_sensitivity: f32,
    pub zoom_sensitivity: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

/// Radians per second for a three.js style auto-rotate speed
/// (speed 2.0 is one full turn every 30 seconds).
pub fn auto_rotate_rate(speed: f32) -> f32 {
    TAU / 60.0 * speed
}

/// Share of the pending motion applied this frame. Damping is given per
/// 60 fps frame and rescaled so the feel is frame-rate independent.
pub fn damping_step(damping_factor: f32, delta_time: f32) -> f32 {
    if damping_factor <= 0.0 {
        return 1.0;
    }
    1.0 - (1.0 - damping_factor.min(1.0)).powf(delta_time * 60.0)
}

pub fn step_orbit(
    current: OrbitState,
    input: &OrbitInput,
    params: &OrbitParams,
    delta_time: f32,
) -> OrbitState {
    let mut orbit = current;

    if params.auto_rotate {
        orbit.yaw += auto_rotate_rate(params.auto_rotate_speed) * delta_time;
    }

    if input.dragging {
        orbit.yaw_velocity -= input.drag_delta.x * params.drag_sensitivity;
        orbit.pitch_velocity += input.drag_delta.y * params.drag_sensitivity;
    }

    let step = damping_step(params.damping_factor, delta_time);
    orbit.yaw += orbit.yaw_velocity * step;
    orbit.pitch += orbit.pitch_velocity * step;
    orbit.yaw_velocity *= 1.0 - step;
    orbit.pitch_velocity *= 1.0 - step;

    orbit.pitch = orbit.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    orbit.yaw = orbit.yaw.rem_euclid(TAU);

    if input.wheel_delta != 0.0 {
        orbit.radius -= input.wheel_delta * params.zoom_sensitivity;
    }
    orbit.radius = orbit.radius.clamp(params.min_distance, params.max_distance);

    orbit
}

/// World position of the camera for `orbit` around `target`.
pub fn orbit_translation(orbit: &OrbitState, target: Vec3) -> Vec3 {
    let (sin_yaw, cos_yaw) = orbit.yaw.sin_cos();
    let (sin_pitch, cos_pitch) = orbit.pitch.sin_cos();
    target
        + orbit.radius * Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn still_input() -> OrbitInput {
        OrbitInput {
            dragging: false,
            drag_delta: Vec2::ZERO,
            wheel_delta: 0.0,
        }
    }

    fn params(auto_rotate: bool) -> OrbitParams {
        OrbitParams {
            auto_rotate,
            auto_rotate_speed: 0.5,
            damping_factor: 0.05,
            drag_sensitivity: 0.005,
            zoom_sensitivity: 0.5,
            min_distance: 4.0,
            max_distance: 40.0,
        }
    }

    #[test]
    fn test_no_input_no_change() {
        let start = OrbitState::new(10.0);
        let result = step_orbit(start, &still_input(), &params(false), 1.0 / 60.0);
        assert_eq!(result, start);
    }

    #[rstest]
    #[case(0.5, 1.0, TAU / 120.0)]
    #[case(2.0, 30.0, 0.0)] // exactly one full turn
    #[case(1.0, 2.0, TAU / 30.0)]
    fn test_auto_rotate(#[case] speed: f32, #[case] seconds: f32, #[case] expected_yaw: f32) {
        let mut p = params(true);
        p.auto_rotate_speed = speed;
        let result = step_orbit(OrbitState::new(10.0), &still_input(), &p, seconds);
        let diff = (result.yaw - expected_yaw).rem_euclid(TAU);
        assert!(diff < 1e-3 || TAU - diff < 1e-3, "yaw was {}", result.yaw);
    }

    #[test]
    fn test_auto_rotate_off_keeps_yaw() {
        let result = step_orbit(OrbitState::new(10.0), &still_input(), &params(false), 5.0);
        assert_eq!(result.yaw, 0.0);
    }

    #[test]
    fn test_drag_is_applied_gradually_then_fully() {
        let p = params(false);
        let drag = OrbitInput {
            dragging: true,
            drag_delta: Vec2::new(-100.0, 0.0),
            wheel_delta: 0.0,
        };
        let dt = 1.0 / 60.0;

        let mut orbit = step_orbit(OrbitState::new(10.0), &drag, &p, dt);
        let first_frame_yaw = orbit.yaw;
        assert!(first_frame_yaw > 0.0 && first_frame_yaw < 0.5);

        for _ in 0..2000 {
            orbit = step_orbit(orbit, &still_input(), &p, dt);
        }
        assert!((orbit.yaw - 0.5).abs() < 1e-3, "yaw was {}", orbit.yaw);
        assert!(orbit.yaw_velocity.abs() < 1e-4);
    }

    #[test]
    fn test_drag_ignored_when_not_dragging() {
        let input = OrbitInput {
            dragging: false,
            drag_delta: Vec2::new(50.0, 50.0),
            wheel_delta: 0.0,
        };
        let result = step_orbit(OrbitState::new(10.0), &input, &params(false), 1.0 / 60.0);
        assert_eq!(result.yaw, 0.0);
        assert_eq!(result.pitch, 0.0);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut p = params(false);
        p.damping_factor = 0.0;
        let input = OrbitInput {
            dragging: true,
            drag_delta: Vec2::new(0.0, 10_000.0),
            wheel_delta: 0.0,
        };
        let result = step_orbit(OrbitState::new(10.0), &input, &p, 1.0 / 60.0);
        assert!((result.pitch - PITCH_LIMIT).abs() < 1e-6);
    }

    #[rstest]
    #[case(2.0, 9.0)]
    #[case(-4.0, 12.0)]
    #[case(100.0, 4.0)]
    #[case(-100.0, 40.0)]
    fn test_zoom(#[case] wheel_delta: f32, #[case] expected_radius: f32) {
        let input = OrbitInput {
            dragging: false,
            drag_delta: Vec2::ZERO,
            wheel_delta,
        };
        let result = step_orbit(OrbitState::new(10.0), &input, &params(false), 1.0 / 60.0);
        assert!((result.radius - expected_radius).abs() < 1e-5);
    }

    #[rstest]
    #[case(0.05, 1.0 / 60.0, 0.05)]
    #[case(0.0, 1.0 / 60.0, 1.0)]
    #[case(1.0, 1.0 / 60.0, 1.0)]
    fn test_damping_step(#[case] factor: f32, #[case] dt: f32, #[case] expected: f32) {
        assert!((damping_step(factor, dt) - expected).abs() < 1e-4);
    }

    #[test]
    fn test_orbit_translation() {
        let orbit = OrbitState::new(10.0);
        let position = orbit_translation(&orbit, Vec3::ZERO);
        assert!((position - Vec3::new(0.0, 0.0, 10.0)).length() < 1e-5);

        let side = OrbitState {
            yaw: FRAC_PI_2,
            ..OrbitState::new(5.0)
        };
        let position = orbit_translation(&side, Vec3::new(0.0, 1.0, 0.0));
        assert!((position - Vec3::new(5.0, 1.0, 0.0)).length() < 1e-5);
    }
}
