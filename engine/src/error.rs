//! Configuration Errors
//!
//! Every tunable is validated once when a controller is built. Per-frame
//! updates never fail, so this is the only error type in the crate.

use thiserror::Error;

/// Rotation axis named in a clamp error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Horizontal => write!(f, "horizontal"),
            Axis::Vertical => write!(f, "vertical"),
        }
    }
}

/// Errors raised while loading or validating controller configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{axis} clamp bounds are inverted: lower {lower} > upper {upper}")]
    InvertedBounds { axis: Axis, lower: f32, upper: f32 },

    #[error("smoothing window must be within 5..=20 frames, got {0}")]
    SmoothingWindowOutOfRange(usize),

    #[error("{field} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reject NaN and infinities.
pub(crate) fn ensure_finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field })
    }
}

/// Require `min <= value <= max`.
pub(crate) fn ensure_range(
    field: &'static str,
    value: f32,
    min: f32,
    max: f32,
) -> Result<(), ConfigError> {
    ensure_finite(field, value)?;
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

/// Require a strictly positive, finite value.
pub(crate) fn ensure_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    ensure_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

/// Require a non-negative, finite value.
pub(crate) fn ensure_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    ensure_finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min: 0.0,
            max: f32::INFINITY,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_accepts_bounds() {
        assert!(ensure_range("strength", 0.0, 0.0, 1.0).is_ok());
        assert!(ensure_range("strength", 1.0, 0.0, 1.0).is_ok());
    }

    #[test]
    fn test_range_rejects_outside() {
        let err = ensure_range("strength", 1.5, 0.0, 1.0).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { field: "strength", .. }));
    }

    #[test]
    fn test_nan_is_rejected() {
        let err = ensure_positive("gravity", f32::NAN).unwrap_err();
        assert!(matches!(err, ConfigError::NonFinite { field: "gravity" }));
    }

    #[test]
    fn test_zero_is_not_positive() {
        assert!(matches!(
            ensure_positive("gravity", 0.0),
            Err(ConfigError::NonPositive { .. })
        ));
        assert!(ensure_non_negative("jump_height", 0.0).is_ok());
    }

    #[test]
    fn test_display_messages() {
        let err = ConfigError::InvertedBounds {
            axis: Axis::Vertical,
            lower: 10.0,
            upper: -10.0,
        };
        assert_eq!(
            err.to_string(),
            "vertical clamp bounds are inverted: lower 10 > upper -10"
        );
        assert_eq!(
            ConfigError::SmoothingWindowOutOfRange(0).to_string(),
            "smoothing window must be within 5..=20 frames, got 0"
        );
    }
}
