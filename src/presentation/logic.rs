use bevy::prelude::Resource;
use thermoconv::config::InputConfig;
use thermoconv::ramp::{ColorSample, color_for, fill_fraction_for};
use thermoconv::{ConvertedTriple, TemperatureScale, convert, parse_input};

pub const RESET_INPUT: &str = "0";

/// UI state owned by the presentation layer.
///
/// Every transition recomputes the whole [`ConvertedTriple`] from the raw text
/// and the active scale, so the snapshot is never partially updated.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct PresentationState {
    raw_input: String,
    active_unit: TemperatureScale,
    rotating: bool,
    triple: ConvertedTriple,
}

impl Default for PresentationState {
    fn default() -> Self {
        Self::from_input_config(&InputConfig::default())
    }
}

impl PresentationState {
    pub fn new(raw_input: impl Into<String>, active_unit: TemperatureScale) -> Self {
        let raw_input = raw_input.into();
        let triple = convert(parse_input(&raw_input), active_unit);
        Self {
            raw_input,
            active_unit,
            rotating: true,
            triple,
        }
    }

    pub fn from_input_config(input: &InputConfig) -> Self {
        Self::new(input.initial_value.clone(), input.initial_scale)
    }

    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    pub fn active_unit(&self) -> TemperatureScale {
        self.active_unit
    }

    pub fn rotating(&self) -> bool {
        self.rotating
    }

    pub fn triple(&self) -> ConvertedTriple {
        self.triple
    }

    pub fn set_input(&mut self, raw: impl Into<String>) -> ConvertedTriple {
        self.raw_input = raw.into();
        self.recompute()
    }

    /// Makes `unit` the input scale and reinterprets the current text in it.
    pub fn select_unit(&mut self, unit: TemperatureScale) -> ConvertedTriple {
        self.active_unit = unit;
        self.recompute()
    }

    pub fn toggle_rotation(&mut self) -> bool {
        self.rotating = !self.rotating;
        self.rotating
    }

    pub fn reset(&mut self) -> ConvertedTriple {
        self.set_input(RESET_INPUT)
    }

    pub fn rotation_label(&self) -> &'static str {
        rotation_label(self.rotating)
    }

    pub fn frame(&self) -> DisplayFrame {
        compose_frame(&self.triple, self.active_unit)
    }

    fn recompute(&mut self) -> ConvertedTriple {
        self.triple = convert(parse_input(&self.raw_input), self.active_unit);
        self.triple
    }
}

pub fn rotation_label(rotating: bool) -> &'static str {
    if rotating { "Stop Rotation" } else { "Start Rotation" }
}

/// What one thermometer should show.
#[derive(Debug, Clone, PartialEq)]
pub struct ThermometerReading {
    pub scale: TemperatureScale,
    pub value: f64,
    pub readout: String,
    pub color: ColorSample,
    pub fill: f64,
}

/// Everything the display surfaces need for one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayFrame {
    /// Indexed by [`TemperatureScale::index`].
    pub readings: [ThermometerReading; 3],
    pub active_unit: TemperatureScale,
    pub backdrop: ColorSample,
}

impl DisplayFrame {
    pub fn reading(&self, scale: TemperatureScale) -> &ThermometerReading {
        &self.readings[scale.index()]
    }
}

pub fn compose_frame(triple: &ConvertedTriple, active_unit: TemperatureScale) -> DisplayFrame {
    let readings = TemperatureScale::ALL.map(|scale| {
        let value = triple.get(scale);
        ThermometerReading {
            scale,
            value,
            readout: triple.readout(scale),
            color: color_for(value, scale),
            fill: fill_fraction_for(value, scale),
        }
    });
    let backdrop = readings[active_unit.index()].color;

    DisplayFrame {
        readings,
        active_unit,
        backdrop,
    }
}
