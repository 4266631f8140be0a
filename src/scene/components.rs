use bevy::prelude::*;
use thermoconv::TemperatureScale;

/// One thermometer in the scene.
///
/// Holds direct handles to the parts the presentation layer recolors, so
/// nothing depends on the order children were spawned in.
#[derive(Component, Debug)]
pub struct Thermometer {
    pub scale: TemperatureScale,
    pub liquid: Entity,
    pub bulb: Entity,
}

#[derive(Component)]
pub struct LiquidColumn;

#[derive(Component)]
pub struct Bulb;

/// Plate floating above a thermometer; the control panel draws the scale
/// name over it.
#[derive(Component, Debug)]
pub struct ThermometerLabel {
    pub scale: TemperatureScale,
}

/// Parent of the three thermometers; spins slowly about Y.
#[derive(Component)]
pub struct ThermometerGroup;

/// Large glowing sphere behind the thermometers tinted by the active scale.
#[derive(Component)]
pub struct Backdrop;
