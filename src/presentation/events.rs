use bevy::prelude::*;
use thermoconv::TemperatureScale;

/// The temperature text field changed. Carries the raw text as typed.
#[derive(Message, Debug, Clone)]
pub struct TemperatureInputChanged {
    pub raw: String,
}

/// A scale tab was clicked.
#[derive(Message, Debug, Clone, Copy)]
pub struct ScaleSelected {
    pub scale: TemperatureScale,
}

#[derive(Message)]
pub struct ResetRequested;

#[derive(Message)]
pub struct RotationToggled;
