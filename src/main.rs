// disable console on windows for release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use bevy::DefaultPlugins;
use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};
use thermoscope::ThermoscopePlugin;

fn main() {
    App::new()
        .insert_resource(ClearColor(Color::srgb_u8(0x0a, 0x0a, 0x0a)))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Thermoscope".into(),
                resolution: WindowResolution::new(1400, 860),
                present_mode: PresentMode::AutoVsync,
                resize_constraints: WindowResizeConstraints {
                    min_width: 800.0,
                    min_height: 600.0,
                    ..default()
                },
                ..default()
            }),
            ..default()
        }))
        .add_plugins(ThermoscopePlugin)
        .run();
}
