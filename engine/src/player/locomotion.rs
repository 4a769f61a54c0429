//! Player Locomotion Controller
//!
//! Per-frame first-person locomotion: stance, speed selection, jump and
//! gravity, slope-aware ground movement and look orientation.
//!
//! # Frame Order
//!
//! Each [`LocomotionController::update`] call runs, in order:
//!
//! 1. Stance - crouch if crouch is permitted, enabled and held; stand otherwise
//! 2. Sprint - permitted AND enabled AND held
//! 3. Movement - pick a speed, resolve grounded/airborne vertical motion and
//!    hand one displacement to the [`CharacterMover`]
//! 4. Look - feed the look delta to the [`LookAccumulator`] and compose its
//!    rotations onto the origin orientations captured at activation
//!
//! # Vertical Model
//!
//! - Grounded, no jump: vertical speed is `-gravity * dt`, and the displacement
//!   is pushed further down by `|horizontal * tan(slope_limit)| * dt` so the
//!   character stays seated on downhill slopes.
//! - Grounded, jump pressed: vertical speed is `sqrt(2 * gravity * jump_height)`
//!   and the frame moves on the airborne path.
//! - Airborne: vertical speed integrates `-gravity * dt`, never dropping below
//!   `-max_fall_speed`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fp_locomotion_engine::player::{LocomotionConfig, LocomotionController};
//! use fp_locomotion_engine::camera::{CameraLookAccumulator, LookConfig};
//!
//! let look = CameraLookAccumulator::new(LookConfig::default())?;
//! let mut controller =
//!     LocomotionController::new(LocomotionConfig::default(), body, Some(camera), look)?;
//!
//! // Each frame:
//! let report = controller.update(delta_time, &frame_input);
//! ```

use glam::{Quat, Vec2, Vec3};
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use super::speed::MovementSpeeds;
use super::stance::{Stance, StanceController, StanceGeometry, StanceProfile};
use crate::camera::{CameraLookAccumulator, CameraRig, LookAccumulator, LookRotation};
use crate::config::ControllerConfig;
use crate::error::{ConfigError, ensure_non_negative, ensure_positive};
use crate::input::FrameInput;
use crate::physics::CharacterMover;

/// Gravity acceleration in meters per second squared
pub const GRAVITY: f32 = 9.5;

/// Terminal fall speed in meters per second
pub const MAX_FALL_SPEED: f32 = 9.5;

/// Jump apex height in meters
pub const JUMP_HEIGHT: f32 = 1.0;

/// Longest frame the integrator accepts, in seconds
pub const MAX_FRAME_TIME: f32 = 0.1;

/// Locomotion tuning. Copied into the controller at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    pub speeds: MovementSpeeds,
    /// Jump apex height in meters
    pub jump_height: f32,
    /// Gravity magnitude in m/s^2
    pub gravity: f32,
    /// Largest downward speed in m/s
    pub max_fall_speed: f32,
    pub sprint_enabled: bool,
    pub crouch_enabled: bool,
    /// Collider and camera geometry while crouching
    pub crouch: StanceGeometry,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            speeds: MovementSpeeds::default(),
            jump_height: JUMP_HEIGHT,
            gravity: GRAVITY,
            max_fall_speed: MAX_FALL_SPEED,
            sprint_enabled: true,
            crouch_enabled: true,
            crouch: StanceGeometry::default(),
        }
    }
}

impl LocomotionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.speeds.validate()?;
        ensure_non_negative("jump height", self.jump_height)?;
        ensure_positive("gravity", self.gravity)?;
        ensure_positive("max fall speed", self.max_fall_speed)?;
        self.crouch.validate()
    }

    /// Take-off speed that reaches `jump_height` under `gravity`.
    #[inline]
    pub fn jump_speed(&self) -> f32 {
        (2.0 * self.gravity * self.jump_height).sqrt()
    }
}

/// Runtime gameplay locks, separate from the static enable flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlLocks {
    /// When false, move input and jump are ignored (gravity still applies)
    pub can_move: bool,
    /// When false, the look step receives a zero delta
    pub can_camera: bool,
    pub can_sprint: bool,
    pub can_crouch: bool,
}

impl Default for ControlLocks {
    fn default() -> Self {
        Self {
            can_move: true,
            can_camera: true,
            can_sprint: true,
            can_crouch: true,
        }
    }
}

/// Mutable locomotion state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocomotionState {
    /// Signed vertical speed in m/s, carried across frames
    pub vertical_speed: f32,
    pub is_sprinting: bool,
    /// Body orientation at activation; yaw is composed onto this
    pub origin_player_rotation: Quat,
    /// Camera orientation at activation; pitch is composed onto this
    pub origin_camera_rotation: Quat,
}

/// What happened during one update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Displacement handed to the mover
    pub displacement: Vec3,
    /// Vertical speed after this frame
    pub vertical_speed: f32,
    /// Speed chosen for horizontal movement
    pub move_speed: f32,
    pub stance: Stance,
    pub sprinting: bool,
    /// Mover's grounded flag at the start of the frame
    pub was_grounded: bool,
    pub jumped: bool,
    pub look: LookRotation,
}

/// First-person locomotion controller.
///
/// Owns its collaborators: the character mover, an optional camera and the
/// look accumulator. A missing camera is reported once at construction and
/// camera writes are skipped from then on.
#[derive(Debug)]
pub struct LocomotionController<M, C, L = CameraLookAccumulator> {
    config: LocomotionConfig,
    mover: M,
    camera: Option<C>,
    look: L,
    stance: StanceController,
    state: LocomotionState,
    locks: ControlLocks,
    jump_speed: f32,
}

impl<M, C> LocomotionController<M, C, CameraLookAccumulator>
where
    M: CharacterMover,
    C: CameraRig,
{
    /// Build a controller and its look accumulator from a combined config.
    pub fn from_config(
        config: &ControllerConfig,
        mover: M,
        camera: Option<C>,
    ) -> Result<Self, ConfigError> {
        let look = CameraLookAccumulator::new(config.look)?;
        Self::new(config.locomotion, mover, camera, look)
    }
}

impl<M, C, L> LocomotionController<M, C, L>
where
    M: CharacterMover,
    C: CameraRig,
    L: LookAccumulator,
{
    /// Activate a controller.
    ///
    /// Captures the standing geometry from the mover's current collider and
    /// the camera's current local height, and the origin orientations of body
    /// and camera.
    pub fn new(
        config: LocomotionConfig,
        mover: M,
        camera: Option<C>,
        look: L,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let standing_camera_height = match &camera {
            Some(camera) => camera.local_position().y,
            None => {
                warn!(
                    "player camera is missing; camera orientation and height updates are disabled"
                );
                0.0
            }
        };

        let standing = StanceGeometry::from_collider(mover.collider(), standing_camera_height);
        let profile = StanceProfile {
            standing,
            crouching: config.crouch,
        };

        let state = LocomotionState {
            vertical_speed: 0.0,
            is_sprinting: false,
            origin_player_rotation: mover.local_rotation(),
            origin_camera_rotation: camera
                .as_ref()
                .map(|c| c.local_rotation())
                .unwrap_or(Quat::IDENTITY),
        };

        Ok(Self {
            jump_speed: config.jump_speed(),
            config,
            mover,
            camera,
            look,
            stance: StanceController::new(profile),
            state,
            locks: ControlLocks::default(),
        })
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    pub fn state(&self) -> &LocomotionState {
        &self.state
    }

    pub fn stance(&self) -> Stance {
        self.stance.stance()
    }

    pub fn stance_profile(&self) -> &StanceProfile {
        self.stance.profile()
    }

    pub fn is_crouching(&self) -> bool {
        self.stance.is_crouching()
    }

    pub fn is_sprinting(&self) -> bool {
        self.state.is_sprinting
    }

    pub fn vertical_speed(&self) -> f32 {
        self.state.vertical_speed
    }

    /// Take-off speed used when a jump starts.
    pub fn jump_speed(&self) -> f32 {
        self.jump_speed
    }

    pub fn locks(&self) -> &ControlLocks {
        &self.locks
    }

    pub fn locks_mut(&mut self) -> &mut ControlLocks {
        &mut self.locks
    }

    pub fn mover(&self) -> &M {
        &self.mover
    }

    pub fn mover_mut(&mut self) -> &mut M {
        &mut self.mover
    }

    pub fn camera(&self) -> Option<&C> {
        self.camera.as_ref()
    }

    pub fn has_camera(&self) -> bool {
        self.camera.is_some()
    }

    pub fn look(&self) -> &L {
        &self.look
    }

    // ------------------------------------------------------------------
    // Frame update
    // ------------------------------------------------------------------

    /// Run one frame: stance, movement, then look.
    ///
    /// # Arguments
    /// * `dt` - Frame time in seconds, clamped to `[0, MAX_FRAME_TIME]`
    /// * `input` - This frame's input sample
    pub fn update(&mut self, dt: f32, input: &FrameInput) -> FrameReport {
        let dt = dt.clamp(0.0, MAX_FRAME_TIME);

        self.update_stance(input);
        self.state.is_sprinting =
            self.locks.can_sprint && self.config.sprint_enabled && input.sprint_held;

        let movement = self.update_movement(dt, input);
        let look = self.update_look(input);

        FrameReport {
            displacement: movement.displacement,
            vertical_speed: self.state.vertical_speed,
            move_speed: movement.move_speed,
            stance: self.stance.stance(),
            sprinting: self.state.is_sprinting,
            was_grounded: movement.was_grounded,
            jumped: movement.jumped,
            look,
        }
    }

    /// Speed for the given (normalized) move input under the current stance
    /// and sprint state.
    pub fn movement_speed(&self, move_input: Vec2) -> f32 {
        self.config
            .speeds
            .select(self.stance.stance(), move_input, self.state.is_sprinting)
    }

    fn update_stance(&mut self, input: &FrameInput) {
        let crouch_active =
            self.locks.can_crouch && self.config.crouch_enabled && input.crouch_held;

        let Some(geometry) = self.stance.resolve(crouch_active) else {
            return;
        };
        debug!(
            "stance -> {:?} (collider {:.2}m, camera {:.2}m)",
            self.stance.stance(),
            geometry.collider_height,
            geometry.camera_height
        );

        self.mover.set_collider(geometry.collider());
        if let Some(camera) = self.camera.as_mut() {
            let mut position = camera.local_position();
            position.y = geometry.camera_height;
            camera.set_local_position(position);
        }
    }

    fn update_movement(&mut self, dt: f32, input: &FrameInput) -> MovementStep {
        let (move_input, jump_pressed) = if self.locks.can_move {
            (input.move_axis.normalize_or_zero(), input.jump_pressed)
        } else {
            (Vec2::ZERO, false)
        };

        let move_speed = self.movement_speed(move_input);
        let velocity = self.mover.forward() * (move_input.y * move_speed)
            + self.mover.right() * (move_input.x * move_speed);

        let was_grounded = self.mover.is_grounded();
        let mut jumped = false;

        let displacement = if was_grounded {
            if jump_pressed {
                self.state.vertical_speed = self.jump_speed;
                jumped = true;
                debug!("jump, take-off speed {:.3} m/s", self.jump_speed);
                airborne_displacement(velocity, self.state.vertical_speed, dt)
            } else {
                self.state.vertical_speed = -self.config.gravity * dt;
                ground_displacement(
                    velocity,
                    self.state.vertical_speed,
                    self.mover.slope_limit(),
                    dt,
                )
            }
        } else {
            self.state.vertical_speed -= self.config.gravity * dt;
            self.state.vertical_speed = self.state.vertical_speed.max(-self.config.max_fall_speed);
            airborne_displacement(velocity, self.state.vertical_speed, dt)
        };

        trace!(
            "move {:?} (grounded {}, vertical {:.3})",
            displacement,
            was_grounded,
            self.state.vertical_speed
        );
        self.mover.move_with_collision(displacement);

        MovementStep {
            displacement,
            move_speed,
            was_grounded,
            jumped,
        }
    }

    fn update_look(&mut self, input: &FrameInput) -> LookRotation {
        let delta = if self.locks.can_camera {
            input.look_delta
        } else {
            Vec2::ZERO
        };

        let rotation = self.look.compute_rotation(delta);

        self.mover
            .set_local_rotation(self.state.origin_player_rotation * rotation.yaw);
        if let Some(camera) = self.camera.as_mut() {
            camera.set_local_rotation(self.state.origin_camera_rotation * rotation.pitch);
        }

        rotation
    }
}

struct MovementStep {
    displacement: Vec3,
    move_speed: f32,
    was_grounded: bool,
    jumped: bool,
}

/// Grounded displacement with the slope-sticking bias.
///
/// The horizontal part is `velocity * dt`; the vertical part is
/// `vertical_speed - |horizontal_len * tan(slope_limit)| * dt`, pressing the
/// character down by as much as the steepest walkable slope could drop.
///
/// # Arguments
/// * `velocity` - Desired world velocity (only x/z are used)
/// * `vertical_speed` - Grounded vertical term, already scaled by dt
/// * `slope_limit_degrees` - Mover's walkable slope limit
/// * `dt` - Frame time in seconds
pub fn ground_displacement(
    velocity: Vec3,
    vertical_speed: f32,
    slope_limit_degrees: f32,
    dt: f32,
) -> Vec3 {
    let horizontal = Vec3::new(velocity.x * dt, 0.0, velocity.z * dt);
    let stick = (horizontal.length() * slope_limit_degrees.to_radians().tan()).abs() * dt;
    Vec3::new(horizontal.x, vertical_speed - stick, horizontal.z)
}

/// Airborne displacement: the full velocity with the current vertical speed,
/// scaled by dt.
pub fn airborne_displacement(velocity: Vec3, vertical_speed: f32, dt: f32) -> Vec3 {
    Vec3::new(velocity.x, vertical_speed, velocity.z) * dt
}
