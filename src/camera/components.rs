use crate::camera::logic::OrbitState;
use bevy::prelude::*;

#[derive(Component, Reflect, Default)]
#[reflect(Component)]
pub struct MainCamera;

/// Orbit controls for the main camera. `auto_rotate` mirrors the
/// presentation state's rotation flag.
#[derive(Component, Debug)]
pub struct OrbitCamera {
    pub orbit: OrbitState,
    pub target: Vec3,
    pub auto_rotate: bool,
}
