//! Physics module
//!
//! The boundary between locomotion and the host's collision system.
//!
//! # Unit System
//!
//! **1 unit = 1 meter** (SI units throughout)
//!
//! - Distances in meters
//! - Velocities in m/s
//! - Accelerations in m/s²
//! - Slope limits in degrees
//!
//! # Submodules
//!
//! - [`mover`] - The [`CharacterMover`] trait the controller moves through
//! - [`kinematic_body`] - A height-field reference implementation

pub mod kinematic_body;
pub mod mover;

pub use kinematic_body::{DEFAULT_SLOPE_LIMIT, GROUND_SKIN, KinematicBody};
pub use mover::{CharacterMover, ColliderShape};
