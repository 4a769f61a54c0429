//! Kinematic Body
//!
//! A minimal height-field character body implementing [`CharacterMover`].
//! It is the host the simulator and the integration tests drive; a real game
//! would back `CharacterMover` with its physics engine's character sweep.
//!
//! # Ground Model
//!
//! The ground is a height function `h(x, z)`. After each move:
//! - feet below the ground are pushed back up onto it
//! - feet within [`GROUND_SKIN`] of the ground after a non-rising move snap to it
//! - anything else is airborne

use glam::{Quat, Vec3};

use super::mover::{CharacterMover, ColliderShape};

/// How close above the ground the feet may hover and still count as grounded
pub const GROUND_SKIN: f32 = 0.05;

/// Default walkable slope in degrees
pub const DEFAULT_SLOPE_LIMIT: f32 = 45.0;

type GroundFn = Box<dyn Fn(f32, f32) -> f32 + Send + Sync>;

/// Character body over a height field.
pub struct KinematicBody {
    /// Feet position in world space
    pub position: Vec3,
    rotation: Quat,
    collider: ColliderShape,
    slope_limit: f32,
    grounded: bool,
    ground: GroundFn,
    /// Total displacement requested since creation (before ground correction)
    requested_travel: Vec3,
}

impl std::fmt::Debug for KinematicBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KinematicBody")
            .field("position", &self.position)
            .field("rotation", &self.rotation)
            .field("collider", &self.collider)
            .field("slope_limit", &self.slope_limit)
            .field("grounded", &self.grounded)
            .finish()
    }
}

impl KinematicBody {
    /// Create a body over an arbitrary ground height function.
    ///
    /// The body starts grounded if `position` is on or within skin distance
    /// of the ground.
    pub fn new<F>(position: Vec3, ground: F) -> Self
    where
        F: Fn(f32, f32) -> f32 + Send + Sync + 'static,
    {
        let ground_y = ground(position.x, position.z);
        let grounded = position.y - ground_y <= GROUND_SKIN;
        Self {
            position: if grounded {
                Vec3::new(position.x, position.y.max(ground_y), position.z)
            } else {
                position
            },
            rotation: Quat::IDENTITY,
            collider: ColliderShape::default(),
            slope_limit: DEFAULT_SLOPE_LIMIT,
            grounded,
            ground: Box::new(ground),
            requested_travel: Vec3::ZERO,
        }
    }

    /// Create a body over flat ground at `ground_height`.
    pub fn on_flat_ground(position: Vec3, ground_height: f32) -> Self {
        Self::new(position, move |_, _| ground_height)
    }

    /// Builder: set the walkable slope limit in degrees.
    pub fn with_slope_limit(mut self, degrees: f32) -> Self {
        self.slope_limit = degrees;
        self
    }

    /// Builder: set the initial collider shape.
    pub fn with_collider(mut self, collider: ColliderShape) -> Self {
        self.collider = collider;
        self
    }

    /// Ground height directly below the body.
    pub fn ground_height(&self) -> f32 {
        (self.ground)(self.position.x, self.position.z)
    }

    /// Sum of every displacement requested so far.
    pub fn requested_travel(&self) -> Vec3 {
        self.requested_travel
    }
}

impl CharacterMover for KinematicBody {
    fn move_with_collision(&mut self, displacement: Vec3) {
        self.requested_travel += displacement;
        self.position += displacement;

        let ground_y = self.ground_height();
        let clearance = self.position.y - ground_y;

        if clearance < 0.0 {
            self.position.y = ground_y;
            self.grounded = true;
        } else if displacement.y <= 0.0 && clearance <= GROUND_SKIN {
            self.position.y = ground_y;
            self.grounded = true;
        } else {
            self.grounded = false;
        }
    }

    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn slope_limit(&self) -> f32 {
        self.slope_limit
    }

    fn collider(&self) -> ColliderShape {
        self.collider
    }

    fn set_collider(&mut self, shape: ColliderShape) {
        self.collider = shape;
    }

    fn local_rotation(&self) -> Quat {
        self.rotation
    }

    fn set_local_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_starts_grounded_on_floor() {
        let body = KinematicBody::on_flat_ground(Vec3::ZERO, 0.0);
        assert!(body.is_grounded());
    }

    #[test]
    fn test_starts_airborne_above_floor() {
        let body = KinematicBody::on_flat_ground(Vec3::new(0.0, 5.0, 0.0), 0.0);
        assert!(!body.is_grounded());
    }

    #[test]
    fn test_downward_move_is_stopped_by_floor() {
        let mut body = KinematicBody::on_flat_ground(Vec3::ZERO, 0.0);
        body.move_with_collision(Vec3::new(1.0, -0.5, 0.0));
        assert!(approx_eq(body.position.y, 0.0));
        assert!(approx_eq(body.position.x, 1.0));
        assert!(body.is_grounded());
    }

    #[test]
    fn test_upward_move_leaves_ground() {
        let mut body = KinematicBody::on_flat_ground(Vec3::ZERO, 0.0);
        body.move_with_collision(Vec3::new(0.0, 0.02, 0.0));
        assert!(!body.is_grounded());
    }

    #[test]
    fn test_follows_downhill_ramp() {
        // Ground drops 0.5m per meter of +X
        let mut body = KinematicBody::new(Vec3::ZERO, |x, _| -0.5 * x);
        body.move_with_collision(Vec3::new(0.1, -0.06, 0.0));
        assert!(body.is_grounded());
        assert!(approx_eq(body.position.y, -0.05));
    }

    #[test]
    fn test_requested_travel_accumulates() {
        let mut body = KinematicBody::on_flat_ground(Vec3::ZERO, 0.0);
        body.move_with_collision(Vec3::new(1.0, -1.0, 0.0));
        body.move_with_collision(Vec3::new(1.0, -1.0, 0.0));
        assert_eq!(body.requested_travel(), Vec3::new(2.0, -2.0, 0.0));
    }

    #[test]
    fn test_builders_set_slope_and_collider() {
        let collider = ColliderShape::new(1.8, Vec3::new(0.0, 0.9, 0.0));
        let body = KinematicBody::on_flat_ground(Vec3::ZERO, 0.0)
            .with_slope_limit(30.0)
            .with_collider(collider);
        assert_eq!(body.slope_limit(), 30.0);
        assert_eq!(body.collider(), collider);
    }

    #[test]
    fn test_default_directions() {
        let body = KinematicBody::on_flat_ground(Vec3::ZERO, 0.0);
        assert!(approx_eq(body.forward().z, -1.0));
        assert!(approx_eq(body.right().x, 1.0));
    }
}
