pub(crate) mod components;
pub(crate) mod logic;
mod systems;

use crate::camera::components::*;
use crate::camera::systems::*;
use bevy::prelude::*;

pub(crate) struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<MainCamera>()
            .add_systems(Startup, spawn_camera)
            .add_systems(Update, orbit_camera_control);
    }
}
