//! Movement speed selection.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::stance::Stance;
use crate::error::{ConfigError, ensure_non_negative, ensure_range};

/// Base walking speed in meters per second
pub const BASE_SPEED: f32 = 4.0;

/// Sprint speed in meters per second
pub const SPRINT_SPEED: f32 = 6.0;

/// Crouch speed in meters per second
pub const CROUCH_SPEED: f32 = 3.0;

/// Fraction of base speed used when moving backward
pub const BACKWARD_MULTIPLIER: f32 = 0.75;

/// Per-stance and per-direction movement speeds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementSpeeds {
    pub base: f32,
    pub sprint: f32,
    pub crouch: f32,
    /// Applied to `base` when the forward input is negative (0..=1)
    pub backward_multiplier: f32,
}

impl Default for MovementSpeeds {
    fn default() -> Self {
        Self {
            base: BASE_SPEED,
            sprint: SPRINT_SPEED,
            crouch: CROUCH_SPEED,
            backward_multiplier: BACKWARD_MULTIPLIER,
        }
    }
}

impl MovementSpeeds {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_non_negative("base speed", self.base)?;
        ensure_non_negative("sprint speed", self.sprint)?;
        ensure_non_negative("crouch speed", self.crouch)?;
        ensure_range("backward multiplier", self.backward_multiplier, 0.0, 1.0)
    }

    /// Pick the speed for this frame.
    ///
    /// Precedence:
    /// 1. crouching - crouch speed, whatever the direction or sprint state
    /// 2. moving forward while sprinting - sprint speed
    /// 3. forward or pure strafe - base speed
    /// 4. any backward component - base speed scaled by the backward multiplier
    pub fn select(&self, stance: Stance, move_input: Vec2, sprinting: bool) -> f32 {
        if stance == Stance::Crouching {
            self.crouch
        } else if move_input.y > 0.0 && sprinting {
            self.sprint
        } else if move_input.y >= 0.0 {
            self.base
        } else {
            self.base * self.backward_multiplier
        }
    }
}
