mod camera;
mod config;
mod presentation;
mod scene;
mod ui;

use crate::camera::CameraPlugin;
use crate::config::AppConfig;
use crate::presentation::PresentationPlugin;
use crate::scene::ScenePlugin;
use crate::ui::ControlPanelPlugin;
use bevy::app::App;
#[cfg(debug_assertions)]
use bevy::diagnostic::LogDiagnosticsPlugin;
use bevy::prelude::*;

pub use crate::presentation::logic::{DisplayFrame, PresentationState, ThermometerReading};

pub struct ThermoscopePlugin;

impl Plugin for ThermoscopePlugin {
    fn build(&self, app: &mut App) {
        let config = thermoconv::get_config();
        info!(
            "Starting with {} input `{}`",
            config.input.initial_scale, config.input.initial_value
        );

        app.insert_resource(AppConfig(config)).add_plugins((
            PresentationPlugin,
            ScenePlugin,
            CameraPlugin,
            ControlPanelPlugin,
        ));

        #[cfg(debug_assertions)]
        {
            app.add_plugins(LogDiagnosticsPlugin::default());
        }
    }
}
