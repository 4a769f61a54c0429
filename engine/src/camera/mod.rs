//! Camera Module
//!
//! First-person look control: clamped, smoothed yaw/pitch accumulation and
//! the camera handle the controller writes to.
//! This module is window-system agnostic - it only deals with camera state and math.

pub mod clamp;
pub mod look_accumulator;
pub mod rig;
pub mod smoothing;

pub use clamp::{
    AxisBounds, ClampConfig, ClampMode, DEFAULT_HORIZONTAL_BOUNDS, DEFAULT_VERTICAL_BOUNDS,
    clamp_angle,
};
pub use look_accumulator::{
    CameraLookAccumulator, LookAccumulator, LookConfig, LookRotation, LookState,
};
pub use rig::{CameraRig, CameraTransform};
pub use smoothing::{AngleHistory, MAX_SMOOTHING_WINDOW, MIN_SMOOTHING_WINDOW, SmoothingConfig};
