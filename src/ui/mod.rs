mod systems;

use crate::ui::systems::*;
use bevy::prelude::*;
use bevy_egui::{EguiPlugin, EguiPrimaryContextPass};

/// Width of the docked control panel in logical pixels.
pub const PANEL_WIDTH: f32 = 320.0;

pub struct ControlPanelPlugin;

impl Plugin for ControlPanelPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin::default())
            .add_systems(Startup, init_temperature_field)
            .add_systems(
                EguiPrimaryContextPass,
                (render_control_panel, render_thermometer_labels),
            );
    }
}
