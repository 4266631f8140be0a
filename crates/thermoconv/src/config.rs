use crate::error::ConfigError;
use crate::scale::TemperatureScale;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const CONFIG_PATH: &str = "thermoscope.toml";

static CONFIG: OnceLock<ThermoscopeConfig> = OnceLock::new();

/// Get a copy of the configuration, loading `thermoscope.toml` on first use.
/// Falls back to defaults if the file is missing or invalid.
pub fn get_config() -> ThermoscopeConfig {
    CONFIG
        .get_or_init(|| ThermoscopeConfig::load_or_default(CONFIG_PATH))
        .clone()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThermoscopeConfig {
    pub input: InputConfig,
    pub scene: SceneConfig,
    pub camera: CameraConfig,
    pub particles: ParticleConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Text shown in the input field on startup.
    pub initial_value: String,
    pub initial_scale: TemperatureScale,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Distance between neighbouring thermometers along X.
    pub thermometer_spacing: f32,
    /// Liquid column height at a fill fraction of 1.
    pub liquid_max_height: f32,
    /// Y of the bottom of the liquid column, relative to its thermometer.
    pub liquid_base_y: f32,
    /// Constant spin of the thermometer group, radians per second.
    pub group_spin_per_second: f32,
    pub label_height: f32,
    pub shadows: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub fov_degrees: f32,
    /// Same unit as three.js OrbitControls: 2.0 is one turn every 30 s.
    pub auto_rotate_speed: f32,
    /// Fraction of orbit velocity applied per frame at 60 fps.
    pub damping_factor: f32,
    pub drag_sensitivity: f32,
    pub zoom_sensitivity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub count: usize,
    pub shell_inner_radius: f32,
    pub shell_thickness: f32,
    pub size: f32,
    pub opacity: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            initial_value: "25".to_string(),
            initial_scale: TemperatureScale::Celsius,
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            thermometer_spacing: 4.0,
            liquid_max_height: 4.0,
            liquid_base_y: -2.0,
            // 0.001 rad per frame at 60 fps
            group_spin_per_second: 0.06,
            label_height: 3.0,
            shadows: true,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: 10.0,
            min_distance: 4.0,
            max_distance: 40.0,
            fov_degrees: 75.0,
            auto_rotate_speed: 0.5,
            damping_factor: 0.05,
            drag_sensitivity: 0.005,
            zoom_sensitivity: 0.5,
        }
    }
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 1000,
            shell_inner_radius: 20.0,
            shell_thickness: 10.0,
            size: 0.1,
            opacity: 0.8,
        }
    }
}

impl ThermoscopeConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ThermoscopeConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("{} not found, using default configuration", path.display());
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{err}; using default configuration");
                Self::default()
            }
        }
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("scene.thermometer_spacing", self.scene.thermometer_spacing)?;
        positive("scene.liquid_max_height", self.scene.liquid_max_height)?;
        positive("camera.min_distance", self.camera.min_distance)?;
        positive("camera.fov_degrees", self.camera.fov_degrees)?;
        positive("particles.size", self.particles.size)?;

        if self.camera.max_distance < self.camera.min_distance {
            return Err(ConfigError::Invalid {
                field: "camera.max_distance",
                reason: format!(
                    "{} is below min_distance {}",
                    self.camera.max_distance, self.camera.min_distance
                ),
            });
        }
        if !(0.0..=1.0).contains(&self.camera.damping_factor) {
            return Err(ConfigError::Invalid {
                field: "camera.damping_factor",
                reason: format!("{} is outside 0..=1", self.camera.damping_factor),
            });
        }
        if !(0.0..=1.0).contains(&self.particles.opacity) {
            return Err(ConfigError::Invalid {
                field: "particles.opacity",
                reason: format!("{} is outside 0..=1", self.particles.opacity),
            });
        }
        if self.particles.shell_thickness < 0.0 {
            return Err(ConfigError::Invalid {
                field: "particles.shell_thickness",
                reason: "must not be negative".to_string(),
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("{value} must be a positive number"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(ThermoscopeConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = ThermoscopeConfig::from_toml_str(
            r#"
            [input]
            initial_scale = "kelvin"

            [particles]
            count = 250
            "#,
        )
        .unwrap();

        assert_eq!(config.input.initial_scale, TemperatureScale::Kelvin);
        assert_eq!(config.input.initial_value, "25");
        assert_eq!(config.particles.count, 250);
        assert_eq!(config.scene, SceneConfig::default());
    }

    #[test]
    fn test_rejects_inverted_zoom_range() {
        let err = ThermoscopeConfig::from_toml_str(
            r#"
            [camera]
            min_distance = 10.0
            max_distance = 5.0
            "#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "camera.max_distance",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_non_positive_height() {
        let err = ThermoscopeConfig::from_toml_str("[scene]\nliquid_max_height = 0.0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "scene.liquid_max_height",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_unknown_scale() {
        let err = ThermoscopeConfig::from_toml_str("[input]\ninitial_scale = \"rankine\"\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let config = ThermoscopeConfig::load_or_default("does/not/exist/thermoscope.toml");
        assert_eq!(config, ThermoscopeConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!(
            "thermoscope-config-test-{}.toml",
            std::process::id()
        ));
        let mut config = ThermoscopeConfig::default();
        config.camera.auto_rotate_speed = 1.5;
        config.save_to_file(&path).unwrap();

        let loaded = ThermoscopeConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }
}
