pub mod config;
pub mod convert;
pub mod error;
pub mod ramp;
pub mod scale;

pub use config::{ThermoscopeConfig, get_config};
pub use convert::{ConvertedTriple, convert, format_readout, parse_input};
pub use error::{ConfigError, ScaleParseError};
pub use ramp::{ColorSample, color_for, fill_fraction_for};
pub use scale::TemperatureScale;
