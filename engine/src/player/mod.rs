//! Player Module
//!
//! First-person player locomotion.
//!
//! # Components
//!
//! - [`LocomotionController`] - Per-frame stance, movement, jump/gravity and look
//!   - Grounded frames stick to slopes; airborne frames integrate gravity with a
//!     terminal fall speed
//!   - Runtime [`ControlLocks`] gate movement, camera, sprint and crouch
//! - [`StanceController`] - Level-triggered standing/crouching state
//! - [`MovementSpeeds`] - Speed selection by stance, direction and sprint

pub mod locomotion;
pub mod speed;
pub mod stance;

pub use locomotion::{
    ControlLocks, FrameReport, GRAVITY, JUMP_HEIGHT, LocomotionConfig, LocomotionController,
    LocomotionState, MAX_FALL_SPEED, MAX_FRAME_TIME, airborne_displacement, ground_displacement,
};
pub use speed::{BACKWARD_MULTIPLIER, BASE_SPEED, CROUCH_SPEED, MovementSpeeds, SPRINT_SPEED};
pub use stance::{Stance, StanceController, StanceGeometry, StanceProfile};
