//! Camera Look Accumulator
//!
//! Turns raw per-frame look deltas (mouse or stick) into two absolute,
//! clamped and optionally smoothed rotation angles:
//!
//! - yaw, applied to the player body about world up
//! - pitch, applied to the camera about its local horizontal axis
//!
//! # Pipeline
//!
//! Each call to [`CameraLookAccumulator::compute_rotation`] runs:
//!
//! 1. Accumulate `delta * base_speed * axis_multiplier` into the raw angles
//! 2. Clamp the raw angles (the clamped value is stored back)
//! 3. Smooth against the per-axis moving average, if enabled
//! 4. Clamp again so blending toward the mean can never leave the bounds
//! 5. Build quaternions from the final angles
//!
//! The returned rotations are offsets from a fixed origin orientation, not
//! increments from the previous frame, which is what makes the clamp bounds
//! absolute view limits.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fp_locomotion_engine::camera::{CameraLookAccumulator, LookAccumulator, LookConfig};
//! use glam::Vec2;
//!
//! let mut look = CameraLookAccumulator::new(LookConfig::default())?;
//! let rotation = look.compute_rotation(Vec2::new(mouse_dx, mouse_dy));
//! body_rotation = origin_body * rotation.yaw;
//! camera_rotation = origin_camera * rotation.pitch;
//! ```

use glam::{Quat, Vec2};
use serde::{Deserialize, Serialize};

use super::clamp::ClampConfig;
use super::smoothing::{AngleHistory, SmoothingConfig};
use crate::error::{ConfigError, ensure_non_negative, ensure_range};

/// Upper limit of the per-axis speed multipliers
pub const MAX_AXIS_MULTIPLIER: f32 = 2.0;

/// Look speed, clamping and smoothing settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookConfig {
    /// Degrees per unit of look input before the axis multipliers
    pub base_speed: f32,
    /// Yaw speed multiplier (0..=2)
    pub horizontal_multiplier: f32,
    /// Pitch speed multiplier (0..=2)
    pub vertical_multiplier: f32,
    pub clamp: ClampConfig,
    pub smoothing: SmoothingConfig,
}

impl Default for LookConfig {
    fn default() -> Self {
        Self {
            base_speed: 4.0,
            horizontal_multiplier: 1.0,
            vertical_multiplier: 1.0,
            clamp: ClampConfig::default(),
            smoothing: SmoothingConfig::default(),
        }
    }
}

impl LookConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_non_negative("look base speed", self.base_speed)?;
        ensure_range(
            "horizontal look multiplier",
            self.horizontal_multiplier,
            0.0,
            MAX_AXIS_MULTIPLIER,
        )?;
        ensure_range(
            "vertical look multiplier",
            self.vertical_multiplier,
            0.0,
            MAX_AXIS_MULTIPLIER,
        )?;
        self.clamp.validate()?;
        self.smoothing.validate()
    }

    /// Degrees of yaw per unit of horizontal input.
    #[inline]
    pub fn yaw_gain(&self) -> f32 {
        self.base_speed * self.horizontal_multiplier
    }

    /// Degrees of pitch per unit of vertical input.
    #[inline]
    pub fn pitch_gain(&self) -> f32 {
        self.base_speed * self.vertical_multiplier
    }
}

/// Mutable accumulator state, owned by one [`CameraLookAccumulator`].
#[derive(Debug, Clone)]
pub struct LookState {
    /// Accumulated yaw in degrees (stored post-clamp when yaw is bounded)
    pub raw_yaw: f32,
    /// Accumulated pitch in degrees (stored post-clamp when pitch is bounded)
    pub raw_pitch: f32,
    pub history_yaw: AngleHistory,
    pub history_pitch: AngleHistory,
    /// Final yaw output of the last frame
    pub smoothed_yaw: f32,
    /// Final pitch output of the last frame
    pub smoothed_pitch: f32,
}

impl LookState {
    fn new(window: usize) -> Self {
        Self {
            raw_yaw: 0.0,
            raw_pitch: 0.0,
            history_yaw: AngleHistory::new(window),
            history_pitch: AngleHistory::new(window),
            smoothed_yaw: 0.0,
            smoothed_pitch: 0.0,
        }
    }
}

/// Output of one look step: the final angles and their rotations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookRotation {
    /// Final yaw angle in degrees
    pub yaw_degrees: f32,
    /// Final pitch angle in degrees
    pub pitch_degrees: f32,
    /// Rotation about world up. Positive yaw turns toward +X (right).
    pub yaw: Quat,
    /// Rotation about the local horizontal axis. Positive pitch raises the view.
    pub pitch: Quat,
}

impl LookRotation {
    /// Build the rotation pair for the given angles in degrees.
    pub fn from_degrees(yaw_degrees: f32, pitch_degrees: f32) -> Self {
        Self {
            yaw_degrees,
            pitch_degrees,
            // -Z is forward, so turning right is a negative turn about +Y
            yaw: Quat::from_rotation_y(-yaw_degrees.to_radians()),
            pitch: Quat::from_rotation_x(pitch_degrees.to_radians()),
        }
    }
}

/// Seam between the locomotion controller and whatever produces its look
/// rotations.
pub trait LookAccumulator {
    /// Consume this frame's look delta and return the rotation offsets to
    /// compose onto the origin orientations.
    fn compute_rotation(&mut self, look_delta: Vec2) -> LookRotation;
}

/// Clamped, optionally smoothed two-axis look accumulator.
#[derive(Debug, Clone)]
pub struct CameraLookAccumulator {
    config: LookConfig,
    state: LookState,
}

impl CameraLookAccumulator {
    /// Create an accumulator at zero yaw and pitch.
    ///
    /// Fails if the configuration has inverted bounds, a smoothing window
    /// outside 5..=20, or out-of-range multipliers.
    pub fn new(config: LookConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: LookState::new(config.smoothing.window),
            config,
        })
    }

    pub fn config(&self) -> &LookConfig {
        &self.config
    }

    pub fn state(&self) -> &LookState {
        &self.state
    }

    /// Final yaw of the last frame, in degrees.
    #[inline]
    pub fn yaw(&self) -> f32 {
        self.state.smoothed_yaw
    }

    /// Final pitch of the last frame, in degrees.
    #[inline]
    pub fn pitch(&self) -> f32 {
        self.state.smoothed_pitch
    }

    /// Run one frame of the look pipeline.
    ///
    /// # Arguments
    /// * `look_delta` - Raw device delta. Positive x looks right, positive y looks up.
    pub fn compute_rotation(&mut self, look_delta: Vec2) -> LookRotation {
        let clamp = self.config.clamp;
        let state = &mut self.state;

        state.raw_yaw += look_delta.x * self.config.yaw_gain();
        state.raw_pitch += look_delta.y * self.config.pitch_gain();

        state.raw_yaw = clamp.clamp_yaw(state.raw_yaw);
        state.raw_pitch = clamp.clamp_pitch(state.raw_pitch);

        let smoothing = self.config.smoothing;
        let (yaw, pitch) = if smoothing.enabled {
            (
                state.history_yaw.smooth(state.raw_yaw, smoothing.strength),
                state.history_pitch.smooth(state.raw_pitch, smoothing.strength),
            )
        } else {
            (state.raw_yaw, state.raw_pitch)
        };

        state.smoothed_yaw = clamp.clamp_yaw(yaw);
        state.smoothed_pitch = clamp.clamp_pitch(pitch);

        LookRotation::from_degrees(state.smoothed_yaw, state.smoothed_pitch)
    }

    /// Return to zero angles and forget the smoothing history.
    pub fn reset(&mut self) {
        self.state = LookState::new(self.config.smoothing.window);
    }
}

impl LookAccumulator for CameraLookAccumulator {
    fn compute_rotation(&mut self, look_delta: Vec2) -> LookRotation {
        CameraLookAccumulator::compute_rotation(self, look_delta)
    }
}
