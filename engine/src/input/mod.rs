//! Input Module
//!
//! Per-frame input sampling for locomotion. The controller never polls
//! devices; the host builds one [`FrameInput`] per frame and passes it in.
//!
//! # Example
//!
//! ```rust,ignore
//! use fp_locomotion_engine::input::{FpsMouseState, InputSampler, KeyCode, MovementKeys};
//!
//! let mut keys = MovementKeys::new();
//! let mut mouse = FpsMouseState::new();
//! let mut sampler = InputSampler::new();
//!
//! keys.handle_key(KeyCode::W, true);
//! mouse.set_captured(true);
//! mouse.accumulate_delta(4.0, -2.0);
//!
//! let input = sampler.sample(&keys, &mut mouse);
//! controller.update(dt, &input);
//! ```

pub mod keyboard;
pub mod mouse_state;

use glam::Vec2;

pub use keyboard::{KeyCode, MovementKeys};
pub use mouse_state::FpsMouseState;

/// Everything the locomotion controller reads in one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Movement axes: x = strafe right, y = forward. Normalized by the controller.
    pub move_axis: Vec2,
    /// Jump was pressed this frame (rising edge)
    pub jump_pressed: bool,
    /// Sprint key is held
    pub sprint_held: bool,
    /// Crouch key is held
    pub crouch_held: bool,
    /// Look delta: +x looks right, +y looks up
    pub look_delta: Vec2,
}

impl FrameInput {
    /// Input with only a movement direction.
    pub fn moving(move_axis: Vec2) -> Self {
        Self {
            move_axis,
            ..Default::default()
        }
    }

    /// Input with only a look delta.
    pub fn looking(look_delta: Vec2) -> Self {
        Self {
            look_delta,
            ..Default::default()
        }
    }
}

/// Builds [`FrameInput`]s from held keys and accumulated mouse motion.
///
/// Jump is a level signal on the keyboard but an edge signal for the
/// controller, so the sampler remembers whether it was held last frame.
#[derive(Debug, Clone, Default)]
pub struct InputSampler {
    was_jump_held: bool,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample this frame's input, consuming the pending mouse motion.
    ///
    /// Mouse y is flipped from screen convention (down positive) so that
    /// moving the mouse up produces a positive look delta.
    pub fn sample(&mut self, keys: &MovementKeys, mouse: &mut FpsMouseState) -> FrameInput {
        let jump_pressed = keys.jump && !self.was_jump_held;
        self.was_jump_held = keys.jump;

        let raw = mouse.consume_delta();

        FrameInput {
            move_axis: keys.move_axis(),
            jump_pressed,
            sprint_held: keys.sprint,
            crouch_held: keys.crouch,
            look_delta: Vec2::new(raw.x, -raw.y),
        }
    }
}
