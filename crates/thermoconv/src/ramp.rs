//! Cold-to-hot color ramp and liquid fill level.
//!
//! Both mappings go through [`normalize`], so fill height and hue always agree
//! on where a temperature sits inside its scale's window.

use crate::scale::TemperatureScale;

/// Green is held constant so the blue-to-red ramp has no muddy mid-tones.
pub const RAMP_GREEN: f64 = 0.2;

/// Linear range of a scale that maps onto [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizationWindow {
    pub low: f64,
    pub span: f64,
}

impl NormalizationWindow {
    pub fn high(&self) -> f64 {
        self.low + self.span
    }
}

/// The fixed window for each scale. All three describe -50°C..50°C.
pub fn window_for(scale: TemperatureScale) -> NormalizationWindow {
    match scale {
        TemperatureScale::Celsius => NormalizationWindow {
            low: -50.0,
            span: 100.0,
        },
        TemperatureScale::Fahrenheit => NormalizationWindow {
            low: -58.0,
            span: 180.0,
        },
        TemperatureScale::Kelvin => NormalizationWindow {
            low: 223.0,
            span: 100.0,
        },
    }
}

/// Position of `value` inside the scale's window, clamped to [0, 1].
/// NaN maps to 0.
pub fn normalize(value: f64, scale: TemperatureScale) -> f64 {
    let window = window_for(scale);
    let normalized = (value - window.low) / window.span;
    if normalized.is_nan() {
        return 0.0;
    }
    normalized.clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSample {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl ColorSample {
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.red * factor, self.green * factor, self.blue * factor)
    }

    pub fn to_array(&self) -> [f32; 3] {
        [self.red as f32, self.green as f32, self.blue as f32]
    }
}

pub fn color_for(value: f64, scale: TemperatureScale) -> ColorSample {
    let t = normalize(value, scale);
    ColorSample::new(t, RAMP_GREEN, 1.0 - t)
}

/// Fraction of the liquid column to fill, in [0, 1].
pub fn fill_fraction_for(value: f64, scale: TemperatureScale) -> f64 {
    normalize(value, scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-50.0, ColorSample::new(0.0, 0.2, 1.0))]
    #[case(50.0, ColorSample::new(1.0, 0.2, 0.0))]
    #[case(0.0, ColorSample::new(0.5, 0.2, 0.5))]
    fn test_celsius_color_anchors(#[case] value: f64, #[case] expected: ColorSample) {
        assert_eq!(color_for(value, TemperatureScale::Celsius), expected);
    }

    #[rstest]
    #[case(TemperatureScale::Fahrenheit, -58.0, 0.0)]
    #[case(TemperatureScale::Fahrenheit, 122.0, 1.0)]
    #[case(TemperatureScale::Fahrenheit, 32.0, 0.5)]
    #[case(TemperatureScale::Kelvin, 223.0, 0.0)]
    #[case(TemperatureScale::Kelvin, 323.0, 1.0)]
    #[case(TemperatureScale::Kelvin, 273.0, 0.5)]
    fn test_window_anchors(
        #[case] scale: TemperatureScale,
        #[case] value: f64,
        #[case] expected: f64,
    ) {
        assert!((fill_fraction_for(value, scale) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_window_clamps() {
        assert_eq!(
            color_for(1000.0, TemperatureScale::Celsius),
            color_for(50.0, TemperatureScale::Celsius)
        );
        assert_eq!(fill_fraction_for(-1000.0, TemperatureScale::Kelvin), 0.0);
        assert_eq!(fill_fraction_for(1000.0, TemperatureScale::Fahrenheit), 1.0);
    }

    #[test]
    fn test_fill_matches_red_channel_for_every_scale() {
        for scale in TemperatureScale::ALL {
            let mut value = -500.0;
            while value <= 800.0 {
                assert_eq!(fill_fraction_for(value, scale), color_for(value, scale).red);
                value += 3.7;
            }
        }
    }

    #[test]
    fn test_windows_describe_same_physical_range() {
        let c = window_for(TemperatureScale::Celsius);
        let f = window_for(TemperatureScale::Fahrenheit);
        assert_eq!(c.low * 9.0 / 5.0 + 32.0, f.low);
        assert_eq!(c.high() * 9.0 / 5.0 + 32.0, f.high());
    }

    #[test]
    fn test_nan_normalizes_to_zero() {
        assert_eq!(normalize(f64::NAN, TemperatureScale::Celsius), 0.0);
        assert_eq!(
            color_for(f64::NAN, TemperatureScale::Kelvin),
            ColorSample::new(0.0, 0.2, 1.0)
        );
    }

    #[test]
    fn test_scaled_color() {
        let glow = ColorSample::new(1.0, 0.2, 0.0).scaled(0.3);
        assert!((glow.red - 0.3).abs() < 1e-12);
        assert!((glow.green - 0.06).abs() < 1e-12);
        assert_eq!(glow.blue, 0.0);
    }
}
