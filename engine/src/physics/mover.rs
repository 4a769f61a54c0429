//! Character Mover
//!
//! The collision-move primitive the locomotion controller drives. Collision
//! resolution itself belongs to the host; the controller only asks for a
//! displacement each frame and reads back the grounded flag.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Capsule geometry of the character collider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColliderShape {
    /// Total capsule height in meters
    pub height: f32,
    /// Capsule center relative to the body origin
    pub center: Vec3,
}

impl ColliderShape {
    pub const fn new(height: f32, center: Vec3) -> Self {
        Self { height, center }
    }
}

impl Default for ColliderShape {
    fn default() -> Self {
        Self {
            height: 2.0,
            center: Vec3::new(0.0, 1.0, 0.0),
        }
    }
}

/// Host character body with collide-and-slide movement.
pub trait CharacterMover {
    /// Attempt to move by `displacement` (meters, world space), stopping or
    /// sliding on contact.
    fn move_with_collision(&mut self, displacement: Vec3);

    /// Whether the last move ended in contact with the ground.
    fn is_grounded(&self) -> bool;

    /// Steepest walkable slope, in degrees.
    fn slope_limit(&self) -> f32;

    fn collider(&self) -> ColliderShape;

    fn set_collider(&mut self, shape: ColliderShape);

    /// Body orientation relative to its parent.
    fn local_rotation(&self) -> Quat;

    fn set_local_rotation(&mut self, rotation: Quat);

    /// Body forward direction (-Z rotated by the body orientation).
    fn forward(&self) -> Vec3 {
        self.local_rotation() * Vec3::NEG_Z
    }

    /// Body right direction (+X rotated by the body orientation).
    fn right(&self) -> Vec3 {
        self.local_rotation() * Vec3::X
    }
}
