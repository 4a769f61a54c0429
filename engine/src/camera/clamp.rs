//! Look Angle Clamping
//!
//! Per-axis bounds for the accumulated yaw/pitch angles. Angles are kept in
//! degrees throughout the look pipeline.
//!
//! # Normalization
//!
//! [`clamp_angle`] first folds the angle with a truncated remainder into
//! (-360, 360) and only then clamps. Bounds at or beyond ±360 therefore act
//! as a wrap rather than a stop, while bounds inside ±360 pin the angle:
//!
//! ```rust,ignore
//! assert_eq!(clamp_angle(500.0, -60.0, 60.0), 60.0);   // 140 -> 60
//! assert_eq!(clamp_angle(370.0, -360.0, 360.0), 10.0); // wraps
//! ```

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Axis, ConfigError, ensure_finite};

/// Which look axes are bounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClampMode {
    /// Both axes accumulate freely.
    None,
    /// Only yaw is bounded.
    Horizontal,
    /// Only pitch is bounded (the usual first-person setup).
    #[default]
    Vertical,
    /// Yaw and pitch are both bounded.
    Both,
}

impl ClampMode {
    /// Whether yaw is clamped in this mode.
    #[inline]
    pub fn clamps_horizontal(&self) -> bool {
        matches!(self, ClampMode::Horizontal | ClampMode::Both)
    }

    /// Whether pitch is clamped in this mode.
    #[inline]
    pub fn clamps_vertical(&self) -> bool {
        matches!(self, ClampMode::Vertical | ClampMode::Both)
    }
}

/// Lower/upper bound pair for one axis, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub lower: f32,
    pub upper: f32,
}

impl AxisBounds {
    pub const fn new(lower: f32, upper: f32) -> Self {
        Self { lower, upper }
    }

    /// Clamp `angle` into these bounds after folding it into (-360, 360).
    #[inline]
    pub fn clamp(&self, angle: f32) -> f32 {
        clamp_angle(angle, self.lower, self.upper)
    }

    fn validate(&self, axis: Axis) -> Result<(), ConfigError> {
        ensure_finite("clamp lower bound", self.lower)?;
        ensure_finite("clamp upper bound", self.upper)?;
        if self.lower > self.upper {
            return Err(ConfigError::InvertedBounds {
                axis,
                lower: self.lower,
                upper: self.upper,
            });
        }
        Ok(())
    }
}

/// Default yaw bounds: a full turn either way, i.e. a wrap
pub const DEFAULT_HORIZONTAL_BOUNDS: AxisBounds = AxisBounds::new(-360.0, 360.0);

/// Default pitch bounds
pub const DEFAULT_VERTICAL_BOUNDS: AxisBounds = AxisBounds::new(-60.0, 60.0);

/// Bounds as written in a config file; either side may be omitted.
#[derive(Deserialize)]
struct PartialBounds {
    lower: Option<f32>,
    upper: Option<f32>,
}

impl PartialBounds {
    fn merged_with(self, fallback: AxisBounds) -> AxisBounds {
        AxisBounds::new(
            self.lower.unwrap_or(fallback.lower),
            self.upper.unwrap_or(fallback.upper),
        )
    }
}

fn horizontal_bounds<'de, D>(deserializer: D) -> Result<AxisBounds, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(PartialBounds::deserialize(deserializer)?.merged_with(DEFAULT_HORIZONTAL_BOUNDS))
}

fn vertical_bounds<'de, D>(deserializer: D) -> Result<AxisBounds, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(PartialBounds::deserialize(deserializer)?.merged_with(DEFAULT_VERTICAL_BOUNDS))
}

/// Clamp configuration for both look axes.
///
/// A config file may override a single bound; the other side keeps the
/// per-axis default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClampConfig {
    pub mode: ClampMode,
    /// Yaw bounds (default ±360, i.e. a wrap)
    #[serde(deserialize_with = "horizontal_bounds")]
    pub horizontal: AxisBounds,
    /// Pitch bounds (default ±60)
    #[serde(deserialize_with = "vertical_bounds")]
    pub vertical: AxisBounds,
}

impl Default for ClampConfig {
    fn default() -> Self {
        Self {
            mode: ClampMode::Vertical,
            horizontal: DEFAULT_HORIZONTAL_BOUNDS,
            vertical: DEFAULT_VERTICAL_BOUNDS,
        }
    }
}

impl ClampConfig {
    /// Check that neither axis has inverted or non-finite bounds.
    ///
    /// Both axes are checked regardless of `mode` so that switching the mode
    /// in a config file never exposes a bad pair.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.horizontal.validate(Axis::Horizontal)?;
        self.vertical.validate(Axis::Vertical)
    }

    /// Apply the horizontal bound if the mode includes yaw.
    #[inline]
    pub fn clamp_yaw(&self, yaw: f32) -> f32 {
        if self.mode.clamps_horizontal() {
            self.horizontal.clamp(yaw)
        } else {
            yaw
        }
    }

    /// Apply the vertical bound if the mode includes pitch.
    #[inline]
    pub fn clamp_pitch(&self, pitch: f32) -> f32 {
        if self.mode.clamps_vertical() {
            self.vertical.clamp(pitch)
        } else {
            pitch
        }
    }
}

/// Fold `angle` into (-360, 360) with a truncated remainder, then clamp it
/// into `[min, max]`.
///
/// Expects `min <= max`; with inverted bounds the result is `max`.
pub fn clamp_angle(angle: f32, min: f32, max: f32) -> f32 {
    let folded = angle % 360.0;
    folded.max(min).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_clamp_inside_bounds_is_identity() {
        assert!(approx_eq(clamp_angle(12.5, -60.0, 60.0), 12.5));
        assert!(approx_eq(clamp_angle(-59.0, -60.0, 60.0), -59.0));
    }

    #[test]
    fn test_clamp_pins_to_upper_after_fold() {
        // 500 folds to 140, which is then pinned, not wrapped negative
        assert!(approx_eq(clamp_angle(500.0, -60.0, 60.0), 60.0));
    }

    #[test]
    fn test_clamp_pins_to_lower_after_fold() {
        assert!(approx_eq(clamp_angle(-500.0, -60.0, 60.0), -60.0));
    }

    #[test]
    fn test_full_turn_bounds_wrap() {
        assert!(approx_eq(clamp_angle(370.0, -360.0, 360.0), 10.0));
        assert!(approx_eq(clamp_angle(-725.0, -360.0, 360.0), -5.0));
    }

    #[test]
    fn test_mode_axes() {
        assert!(!ClampMode::None.clamps_horizontal());
        assert!(!ClampMode::None.clamps_vertical());
        assert!(ClampMode::Horizontal.clamps_horizontal());
        assert!(!ClampMode::Horizontal.clamps_vertical());
        assert!(ClampMode::Vertical.clamps_vertical());
        assert!(ClampMode::Both.clamps_horizontal() && ClampMode::Both.clamps_vertical());
    }

    #[test]
    fn test_config_only_clamps_selected_axis() {
        let config = ClampConfig::default();
        // Default mode is vertical: yaw passes through untouched
        assert!(approx_eq(config.clamp_yaw(1000.0), 1000.0));
        assert!(approx_eq(config.clamp_pitch(75.0), 60.0));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let config = ClampConfig {
            vertical: AxisBounds::new(30.0, -30.0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedBounds {
                axis: Axis::Vertical,
                ..
            })
        ));
    }

    #[test]
    fn test_default_config_valid() {
        assert!(ClampConfig::default().validate().is_ok());
    }
}
