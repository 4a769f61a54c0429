//! Camera Rig
//!
//! The host-side camera handle the locomotion controller writes into. The
//! camera is a child of the player body, so only local-space values are used.

use glam::{Quat, Vec3};

/// Local-space camera transform owned by the host.
///
/// Read once at activation (baseline orientation and standing eye height)
/// and written every frame.
pub trait CameraRig {
    fn local_rotation(&self) -> Quat;
    fn set_local_rotation(&mut self, rotation: Quat);
    fn local_position(&self) -> Vec3;
    fn set_local_position(&mut self, position: Vec3);
}

/// Plain-data camera transform for headless hosts and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for CameraTransform {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 1.6, 0.0),
            rotation: Quat::IDENTITY,
        }
    }
}

impl CameraTransform {
    /// Camera at the given local eye height with identity rotation.
    pub fn at_height(height: f32) -> Self {
        Self {
            position: Vec3::new(0.0, height, 0.0),
            rotation: Quat::IDENTITY,
        }
    }

    /// Direction the camera looks in its parent's space (-Z forward).
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }
}

impl CameraRig for CameraTransform {
    fn local_rotation(&self) -> Quat {
        self.rotation
    }

    fn set_local_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }

    fn local_position(&self) -> Vec3 {
        self.position
    }

    fn set_local_position(&mut self, position: Vec3) {
        self.position = position;
    }
}
