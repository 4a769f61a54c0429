//! Keyboard Input Module
//!
//! Held-key state for locomotion. Decoupled from any windowing system: hosts
//! translate their own key events into [`KeyCode`]s.

use glam::Vec2;

/// Generic key codes for locomotion input, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    W,
    A,
    S,
    D,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Space,
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    C,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Tracks which locomotion keys are currently held.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementKeys {
    /// W / Up - move forward
    pub forward: bool,
    /// S / Down - move backward
    pub backward: bool,
    /// A / Left - strafe left
    pub left: bool,
    /// D / Right - strafe right
    pub right: bool,
    /// Space - jump (edge-detected by the sampler)
    pub jump: bool,
    /// Shift - sprint
    pub sprint: bool,
    /// Ctrl / C - crouch while held
    pub crouch: bool,
}

impl MovementKeys {
    /// Create a new movement keys state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update movement state based on key press/release.
    ///
    /// Returns `true` if the key is a locomotion key and was handled.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        let slot = match key {
            KeyCode::W | KeyCode::ArrowUp => &mut self.forward,
            KeyCode::S | KeyCode::ArrowDown => &mut self.backward,
            KeyCode::A | KeyCode::ArrowLeft => &mut self.left,
            KeyCode::D | KeyCode::ArrowRight => &mut self.right,
            KeyCode::Space => &mut self.jump,
            KeyCode::ShiftLeft | KeyCode::ShiftRight => &mut self.sprint,
            KeyCode::ControlLeft | KeyCode::ControlRight | KeyCode::C => &mut self.crouch,
            KeyCode::Unknown => return false,
        };
        *slot = pressed;
        true
    }

    /// Check if any directional key is currently pressed.
    pub fn any_direction(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Raw movement axes: x = right minus left, y = forward minus backward.
    ///
    /// Each component is -1, 0 or 1; diagonal input is not normalized here.
    pub fn move_axis(&self) -> Vec2 {
        Vec2::new(
            (self.right as i32 - self.left as i32) as f32,
            (self.forward as i32 - self.backward as i32) as f32,
        )
    }

    /// Reset all movement keys to released state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys_default() {
        let keys = MovementKeys::new();
        assert!(!keys.any_direction());
        assert_eq!(keys.move_axis(), Vec2::ZERO);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let mut keys = MovementKeys::new();
        keys.handle_key(KeyCode::W, true);
        keys.handle_key(KeyCode::S, true);
        assert_eq!(keys.move_axis().y, 0.0);

        keys.handle_key(KeyCode::D, true);
        assert_eq!(keys.move_axis(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_arrow_keys_alias_wasd() {
        let mut keys = MovementKeys::new();
        keys.handle_key(KeyCode::ArrowDown, true);
        keys.handle_key(KeyCode::ArrowLeft, true);
        assert_eq!(keys.move_axis(), Vec2::new(-1.0, -1.0));
    }

    #[test]
    fn test_modifier_keys() {
        let mut keys = MovementKeys::new();
        assert!(keys.handle_key(KeyCode::ShiftRight, true));
        assert!(keys.handle_key(KeyCode::C, true));
        assert!(keys.sprint && keys.crouch);

        keys.handle_key(KeyCode::ShiftRight, false);
        assert!(!keys.sprint);
    }

    #[test]
    fn test_unknown_key_not_handled() {
        let mut keys = MovementKeys::new();
        assert!(!keys.handle_key(KeyCode::Unknown, true));
        assert!(!keys.any_direction());
    }
}
