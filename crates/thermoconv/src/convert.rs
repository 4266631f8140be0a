use crate::scale::TemperatureScale;

/// Offset between the Celsius and Kelvin zero points.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Above this magnitude every f64 is already a whole number, so there is
/// nothing left to round and scaling by 100 could overflow.
const ROUNDING_LIMIT: f64 = 1e15;

/// The same temperature expressed in all three scales, rounded to hundredths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvertedTriple {
    pub celsius: f64,
    pub fahrenheit: f64,
    pub kelvin: f64,
}

impl ConvertedTriple {
    pub fn get(&self, scale: TemperatureScale) -> f64 {
        match scale {
            TemperatureScale::Celsius => self.celsius,
            TemperatureScale::Fahrenheit => self.fahrenheit,
            TemperatureScale::Kelvin => self.kelvin,
        }
    }

    pub fn readout(&self, scale: TemperatureScale) -> String {
        format_readout(self.get(scale), scale)
    }
}

/// Converts `value` given in `source` into all three scales.
///
/// Non-finite input is treated as 0. Each output is rounded with
/// [`round_hundredths`].
pub fn convert(value: f64, source: TemperatureScale) -> ConvertedTriple {
    let value = if value.is_finite() { value } else { 0.0 };

    // Operation order mirrors the textbook formulas so results match
    // other implementations to the last bit before rounding.
    let (celsius, fahrenheit, kelvin) = match source {
        TemperatureScale::Celsius => (value, value * 9.0 / 5.0 + 32.0, value + KELVIN_OFFSET),
        TemperatureScale::Fahrenheit => (
            (value - 32.0) * 5.0 / 9.0,
            value,
            (value - 32.0) * 5.0 / 9.0 + KELVIN_OFFSET,
        ),
        TemperatureScale::Kelvin => (
            value - KELVIN_OFFSET,
            (value - KELVIN_OFFSET) * 9.0 / 5.0 + 32.0,
            value,
        ),
    };

    ConvertedTriple {
        celsius: round_hundredths(celsius),
        fahrenheit: round_hundredths(fahrenheit),
        kelvin: round_hundredths(kelvin),
    }
}

/// Rounds to two decimal places, halves away from zero.
///
/// Operates on the binary value, so only exactly representable halves
/// (0.125, 0.375, ...) are true ties. Negative zero comes back as +0.
pub fn round_hundredths(value: f64) -> f64 {
    if value.abs() >= ROUNDING_LIMIT {
        return value + 0.0;
    }
    (value * 100.0).round() / 100.0 + 0.0
}

/// Parses a raw text field. Anything unparseable becomes 0.
pub fn parse_input(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

/// Formats a readout such as `"32°F"` or `"273.15K"`: the value rounded to
/// hundredths, printed in its shortest form.
pub fn format_readout(value: f64, scale: TemperatureScale) -> String {
    format!("{}{}", round_hundredths(value), scale.suffix())
}
