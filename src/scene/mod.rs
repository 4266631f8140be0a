pub mod components;
pub mod logic;
mod systems;

use crate::scene::systems::*;
use bevy::prelude::*;

/// Static scene dressing plus the three thermometers.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (
                spawn_lights,
                spawn_thermometers,
                spawn_backdrop,
                spawn_platform,
                spawn_particle_field,
            ),
        )
        .add_systems(Update, spin_thermometer_group);
    }
}
