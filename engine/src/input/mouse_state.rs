//! FPS-style Mouse State Tracker
//!
//! Accumulates raw mouse motion between frames so the look step sees the
//! total motion of the frame, however many device events arrived.

use glam::Vec2;

/// Captured-mouse delta accumulator.
///
/// Motion is only recorded while the cursor is captured; releasing the
/// cursor drops whatever was pending so re-capturing never causes a jump.
///
/// # Example
///
/// ```rust,ignore
/// let mut mouse = FpsMouseState::new();
/// mouse.set_captured(true);
///
/// // In the event loop
/// mouse.accumulate_delta(10.0, -5.0);
/// mouse.accumulate_delta(3.0, 2.0);
///
/// // Once per frame
/// let delta = mouse.consume_delta(); // (13, -3)
/// ```
#[derive(Debug, Clone, Default)]
pub struct FpsMouseState {
    pending: Vec2,
    cursor_captured: bool,
}

impl FpsMouseState {
    /// Create a new mouse state with no pending motion and the cursor released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record raw device motion (screen convention: +y is downward).
    #[inline]
    pub fn accumulate_delta(&mut self, dx: f32, dy: f32) {
        if self.cursor_captured {
            self.pending += Vec2::new(dx, dy);
        }
    }

    /// Take the motion accumulated since the last call.
    #[inline]
    pub fn consume_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.pending)
    }

    /// Pending motion without consuming it.
    #[inline]
    pub fn peek_delta(&self) -> Vec2 {
        self.pending
    }

    pub fn set_captured(&mut self, captured: bool) {
        self.cursor_captured = captured;
        if !captured {
            self.pending = Vec2::ZERO;
        }
    }

    #[inline]
    pub fn is_captured(&self) -> bool {
        self.cursor_captured
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignores_motion_while_released() {
        let mut mouse = FpsMouseState::new();
        mouse.accumulate_delta(5.0, 5.0);
        assert_eq!(mouse.consume_delta(), Vec2::ZERO);
    }

    #[test]
    fn test_accumulate_and_consume() {
        let mut mouse = FpsMouseState::new();
        mouse.set_captured(true);
        mouse.accumulate_delta(10.0, -5.0);
        mouse.accumulate_delta(3.0, 2.0);
        assert_eq!(mouse.peek_delta(), Vec2::new(13.0, -3.0));

        assert_eq!(mouse.consume_delta(), Vec2::new(13.0, -3.0));
        assert_eq!(mouse.consume_delta(), Vec2::ZERO);
    }

    #[test]
    fn test_release_drops_pending() {
        let mut mouse = FpsMouseState::new();
        mouse.set_captured(true);
        mouse.accumulate_delta(7.0, 7.0);
        mouse.set_captured(false);
        assert!(!mouse.is_captured());
        assert_eq!(mouse.peek_delta(), Vec2::ZERO);
    }
}
