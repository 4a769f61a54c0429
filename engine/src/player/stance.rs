//! Player Stance System
//!
//! Standing/crouching posture with per-stance collider and camera geometry.
//!
//! # Stances
//!
//! - Standing: geometry captured from the character at activation
//! - Crouching: geometry taken from configuration
//!
//! # Level-Triggered Transitions
//!
//! The stance follows the crouch signal every frame. There is no toggle and
//! no pending transition: holding crouch means crouching, releasing it means
//! standing on the very next update. Geometry changes are applied the frame
//! the transition is detected.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fp_locomotion_engine::player::{StanceController, StanceProfile};
//!
//! let mut stance = StanceController::new(profile);
//!
//! // Each frame:
//! if let Some(geometry) = stance.resolve(crouch_active) {
//!     apply_collider_and_camera(geometry);
//! }
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ensure_finite, ensure_positive};
use crate::physics::ColliderShape;

/// Player stance states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stance {
    /// Upright, full collider height
    #[default]
    Standing,
    /// Crouched, reduced collider and lowered camera
    Crouching,
}

/// Collider and camera geometry for one stance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StanceGeometry {
    /// Collider height in meters
    pub collider_height: f32,
    /// Collider center relative to the body origin
    pub collider_center: Vec3,
    /// Camera local height above the body origin
    pub camera_height: f32,
}

impl StanceGeometry {
    /// Geometry from an existing collider plus a camera height.
    pub fn from_collider(collider: ColliderShape, camera_height: f32) -> Self {
        Self {
            collider_height: collider.height,
            collider_center: collider.center,
            camera_height,
        }
    }

    /// The collider portion as a [`ColliderShape`].
    #[inline]
    pub fn collider(&self) -> ColliderShape {
        ColliderShape::new(self.collider_height, self.collider_center)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("crouch collider height", self.collider_height)?;
        ensure_finite("crouch collider center x", self.collider_center.x)?;
        ensure_finite("crouch collider center y", self.collider_center.y)?;
        ensure_finite("crouch collider center z", self.collider_center.z)?;
        ensure_finite("crouch camera height", self.camera_height)
    }
}

impl Default for StanceGeometry {
    /// The default crouch geometry: a 1m capsule with the camera at 0.6m.
    fn default() -> Self {
        Self {
            collider_height: 1.0,
            collider_center: Vec3::new(0.0, 0.5, 0.0),
            camera_height: 0.6,
        }
    }
}

/// Geometry for both stances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StanceProfile {
    pub standing: StanceGeometry,
    pub crouching: StanceGeometry,
}

impl StanceProfile {
    /// Geometry for the given stance.
    #[inline]
    pub fn geometry(&self, stance: Stance) -> &StanceGeometry {
        match stance {
            Stance::Standing => &self.standing,
            Stance::Crouching => &self.crouching,
        }
    }
}

/// Tracks the current stance and reports transitions.
#[derive(Debug, Clone)]
pub struct StanceController {
    stance: Stance,
    profile: StanceProfile,
}

impl StanceController {
    /// Create a controller in the standing stance.
    pub fn new(profile: StanceProfile) -> Self {
        Self {
            stance: Stance::Standing,
            profile,
        }
    }

    /// Get the current stance.
    #[inline]
    pub fn stance(&self) -> Stance {
        self.stance
    }

    #[inline]
    pub fn is_crouching(&self) -> bool {
        self.stance == Stance::Crouching
    }

    pub fn profile(&self) -> &StanceProfile {
        &self.profile
    }

    /// Geometry of the current stance.
    #[inline]
    pub fn geometry(&self) -> &StanceGeometry {
        self.profile.geometry(self.stance)
    }

    /// Re-evaluate the stance from this frame's crouch signal.
    ///
    /// # Arguments
    /// * `crouch_active` - Crouch permitted AND enabled AND key held
    ///
    /// # Returns
    /// The new stance geometry if a transition happened, `None` otherwise.
    pub fn resolve(&mut self, crouch_active: bool) -> Option<StanceGeometry> {
        let target = if crouch_active {
            Stance::Crouching
        } else {
            Stance::Standing
        };

        if target == self.stance {
            return None;
        }

        self.stance = target;
        Some(*self.profile.geometry(target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> StanceProfile {
        StanceProfile {
            standing: StanceGeometry {
                collider_height: 2.0,
                collider_center: Vec3::new(0.0, 1.0, 0.0),
                camera_height: 1.6,
            },
            crouching: StanceGeometry::default(),
        }
    }

    #[test]
    fn test_starts_standing() {
        let controller = StanceController::new(profile());
        assert_eq!(controller.stance(), Stance::Standing);
        assert!(!controller.is_crouching());
        assert_eq!(controller.geometry().camera_height, 1.6);
    }

    #[test]
    fn test_crouch_while_held() {
        let mut controller = StanceController::new(profile());

        let changed = controller.resolve(true);
        assert_eq!(changed, Some(StanceGeometry::default()));
        assert_eq!(controller.stance(), Stance::Crouching);

        // Holding for many frames reports no further transitions
        for _ in 0..100 {
            assert!(controller.resolve(true).is_none());
        }
        assert!(controller.is_crouching());
    }

    #[test]
    fn test_release_stands_immediately() {
        let mut controller = StanceController::new(profile());
        controller.resolve(true);

        let changed = controller.resolve(false).unwrap();
        assert_eq!(controller.stance(), Stance::Standing);
        assert_eq!(changed.collider_height, 2.0);
        assert_eq!(changed.camera_height, 1.6);
    }

    #[test]
    fn test_standing_without_input_is_quiet() {
        let mut controller = StanceController::new(profile());
        assert!(controller.resolve(false).is_none());
    }

    #[test]
    fn test_geometry_collider_roundtrip() {
        let shape = ColliderShape::new(1.8, Vec3::new(0.0, 0.9, 0.0));
        let geometry = StanceGeometry::from_collider(shape, 1.5);
        assert_eq!(geometry.collider(), shape);
    }

    #[test]
    fn test_zero_height_rejected() {
        let geometry = StanceGeometry {
            collider_height: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            geometry.validate(),
            Err(ConfigError::NonPositive { .. })
        ));
    }
}
