use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScaleParseError {
    #[error("unknown temperature scale `{0}` (expected celsius, fahrenheit or kelvin)")]
    Unknown(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}
