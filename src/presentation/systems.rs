use crate::camera::components::OrbitCamera;
use crate::config::AppConfig;
use crate::presentation::events::*;
use crate::presentation::logic::PresentationState;
use crate::scene::components::{Backdrop, Bulb, LiquidColumn, Thermometer};
use crate::scene::logic::liquid_column;
use bevy::prelude::*;
use thermoconv::ColorSample;

/// Bulb and liquid glow at this fraction of their base color.
const GLOW_FACTOR: f64 = 0.3;

pub fn apply_control_messages(
    mut input_events: MessageReader<TemperatureInputChanged>,
    mut scale_events: MessageReader<ScaleSelected>,
    mut reset_events: MessageReader<ResetRequested>,
    mut rotation_events: MessageReader<RotationToggled>,
    mut state: ResMut<PresentationState>,
) {
    // Readers are drained one kind at a time, so a scale change always lands
    // before new text from the same frame. The panel sends at most one of each.
    for event in scale_events.read() {
        let triple = state.select_unit(event.scale);
        debug!("Scale {} selected, now {:?}", event.scale, triple);
    }

    for event in input_events.read() {
        let triple = state.set_input(event.raw.clone());
        debug!("Input `{}` converted to {:?}", event.raw, triple);
    }

    for _ in reset_events.read() {
        state.reset();
        info!("Temperature reset");
    }

    for _ in rotation_events.read() {
        let rotating = state.toggle_rotation();
        info!("Auto rotation {}", if rotating { "started" } else { "stopped" });
    }
}

pub fn push_thermometer_readings(
    state: Res<PresentationState>,
    config: Res<AppConfig>,
    thermometers: Query<&Thermometer>,
    mut liquids: Query<(&mut Transform, &MeshMaterial3d<StandardMaterial>), With<LiquidColumn>>,
    bulbs: Query<&MeshMaterial3d<StandardMaterial>, With<Bulb>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let frame = state.frame();

    for thermometer in &thermometers {
        let reading = frame.reading(thermometer.scale);

        if let Ok((mut transform, material)) = liquids.get_mut(thermometer.liquid) {
            let column = liquid_column(
                reading.fill as f32,
                config.scene.liquid_max_height,
                config.scene.liquid_base_y,
            );
            transform.scale.y = column.scale_y;
            transform.translation.y = column.center_y;
            paint(&mut materials, &material.0, reading.color);
        }

        if let Ok(material) = bulbs.get(thermometer.bulb) {
            paint(&mut materials, &material.0, reading.color);
        }
    }
}

pub fn push_backdrop_color(
    state: Res<PresentationState>,
    backdrops: Query<&MeshMaterial3d<StandardMaterial>, With<Backdrop>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let backdrop = state.frame().backdrop;
    for material in &backdrops {
        if let Some(material) = materials.get_mut(&material.0) {
            material.base_color = sample_to_color(backdrop);
            material.emissive = sample_to_color(backdrop).to_linear();
        }
    }
}

pub fn sync_camera_rotation(state: Res<PresentationState>, mut cameras: Query<&mut OrbitCamera>) {
    for mut orbit in &mut cameras {
        if orbit.auto_rotate != state.rotating() {
            orbit.auto_rotate = state.rotating();
        }
    }
}

fn paint(
    materials: &mut Assets<StandardMaterial>,
    handle: &Handle<StandardMaterial>,
    color: ColorSample,
) {
    if let Some(material) = materials.get_mut(handle) {
        material.base_color = sample_to_color(color);
        material.emissive = sample_to_color(color.scaled(GLOW_FACTOR)).to_linear();
    }
}

fn sample_to_color(sample: ColorSample) -> Color {
    let [r, g, b] = sample.to_array();
    Color::srgb(r, g, b)
}
