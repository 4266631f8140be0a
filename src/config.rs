use bevy::prelude::*;
use thermoconv::ThermoscopeConfig;

/// Configuration loaded from `thermoscope.toml`, shared with every plugin.
#[derive(Resource, Clone, Debug, Deref)]
pub struct AppConfig(pub ThermoscopeConfig);
