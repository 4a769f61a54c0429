//! First-Person Locomotion Library
//!
//! Engine-agnostic first-person character control: look accumulation with
//! clamping and moving-average smoothing, and a locomotion controller with
//! stance, sprint, jump, gravity and slope-sticking ground movement.
//!
//! # Modules
//!
//! - [`camera`] - Look accumulation, angle clamping, smoothing and the camera handle
//! - [`player`] - Locomotion controller, stance and speed selection
//! - [`physics`] - The character mover seam and a height-field reference body
//! - [`input`] - Per-frame input sampling from held keys and mouse motion
//! - [`config`] - Serializable controller tuning
//! - [`error`] - Configuration errors
//!
//! # Example
//!
//! ```ignore
//! use fp_locomotion_engine::{ControllerConfig, LocomotionController};
//! use fp_locomotion_engine::camera::CameraTransform;
//! use fp_locomotion_engine::input::{FpsMouseState, InputSampler, KeyCode, MovementKeys};
//! use fp_locomotion_engine::physics::KinematicBody;
//! use glam::Vec3;
//!
//! let body = KinematicBody::on_flat_ground(Vec3::ZERO, 0.0);
//! let camera = CameraTransform::at_height(1.6);
//! let mut controller =
//!     LocomotionController::from_config(&ControllerConfig::default(), body, Some(camera))?;
//!
//! let mut keys = MovementKeys::new();
//! let mut mouse = FpsMouseState::new();
//! let mut sampler = InputSampler::new();
//!
//! keys.handle_key(KeyCode::W, true);
//! let input = sampler.sample(&keys, &mut mouse);
//! let report = controller.update(1.0 / 60.0, &input);
//! ```

pub mod camera;
pub mod config;
pub mod error;
pub mod input;
pub mod physics;
pub mod player;

pub use camera::{CameraLookAccumulator, CameraRig, LookAccumulator, LookConfig, LookRotation};
pub use config::ControllerConfig;
pub use error::ConfigError;
pub use input::{FrameInput, InputSampler};
pub use physics::CharacterMover;
pub use player::{ControlLocks, FrameReport, LocomotionConfig, LocomotionController};
