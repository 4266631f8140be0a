pub mod events;
pub mod logic;
mod systems;

use crate::presentation::events::*;
use crate::presentation::logic::PresentationState;
use crate::presentation::systems::*;
use bevy::prelude::*;

/// Owns [`PresentationState`] and pushes every change to the display surfaces.
pub struct PresentationPlugin;

impl Plugin for PresentationPlugin {
    fn build(&self, app: &mut App) {
        let state = PresentationState::from_input_config(&thermoconv::get_config().input);

        app.insert_resource(state)
            .add_message::<TemperatureInputChanged>()
            .add_message::<ScaleSelected>()
            .add_message::<ResetRequested>()
            .add_message::<RotationToggled>()
            .add_systems(
                Update,
                (
                    apply_control_messages,
                    (push_thermometer_readings, push_backdrop_color, sync_camera_rotation)
                        .run_if(resource_changed::<PresentationState>),
                )
                    .chain(),
            );
    }
}
