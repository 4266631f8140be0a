use crate::error::ScaleParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three supported temperature scales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureScale {
    #[default]
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureScale {
    /// All scales in display order (left to right in the scene).
    pub const ALL: [TemperatureScale; 3] = [
        TemperatureScale::Celsius,
        TemperatureScale::Fahrenheit,
        TemperatureScale::Kelvin,
    ];

    /// Stable lowercase identifier, also used in the configuration file.
    pub fn id(self) -> &'static str {
        match self {
            TemperatureScale::Celsius => "celsius",
            TemperatureScale::Fahrenheit => "fahrenheit",
            TemperatureScale::Kelvin => "kelvin",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TemperatureScale::Celsius => "Celsius",
            TemperatureScale::Fahrenheit => "Fahrenheit",
            TemperatureScale::Kelvin => "Kelvin",
        }
    }

    /// Unit suffix appended to readouts. Kelvin is absolute, so no degree sign.
    pub fn suffix(self) -> &'static str {
        match self {
            TemperatureScale::Celsius => "°C",
            TemperatureScale::Fahrenheit => "°F",
            TemperatureScale::Kelvin => "K",
        }
    }

    /// Position in [`TemperatureScale::ALL`].
    pub fn index(self) -> usize {
        match self {
            TemperatureScale::Celsius => 0,
            TemperatureScale::Fahrenheit => 1,
            TemperatureScale::Kelvin => 2,
        }
    }
}

impl fmt::Display for TemperatureScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TemperatureScale {
    type Err = ScaleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "celsius" | "c" | "°c" => Ok(TemperatureScale::Celsius),
            "fahrenheit" | "f" | "°f" => Ok(TemperatureScale::Fahrenheit),
            "kelvin" | "k" => Ok(TemperatureScale::Kelvin),
            _ => Err(ScaleParseError::Unknown(trimmed.to_string())),
        }
    }
}
