//! Backend-agnostic pointer input
//!
//! Windowing backends feed raw cursor and button changes into a
//! [`PointerTracker`], which turns them into the single-pointer
//! [`PointerEvent`] stream that drives a button's press gesture.

use glam::Vec2;

/// Backend-agnostic mouse button representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button, also used for the primary touch
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (scroll wheel click)
    Middle,
    /// Additional mouse buttons (back, forward, etc.)
    Other(u8),
}

/// One step of a pointer interaction, positions in window space
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// The pointer went down, starting an interaction
    Down(Vec2),
    /// The pointer moved while down
    Move(Vec2),
    /// The pointer was released, ending the interaction
    Up(Vec2),
    /// The interaction ended without a release (touch cancelled, focus lost, ...)
    Cancel,
}

/// Converts raw cursor/button changes into [`PointerEvent`]s
///
/// Only the primary button drives interactions. Moves are reported only while
/// it is held, since a hovering cursor does not take part in a press.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    /// Current cursor position in window coordinates, if known
    cursor_position: Option<Vec2>,

    /// Whether the primary button (or finger) is held down
    primary_down: bool,

    /// Finger driving the current interaction, if it was started by touch
    active_touch: Option<u64>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor_position(&self) -> Option<Vec2> {
        self.cursor_position
    }

    /// Whether an interaction is in progress
    pub fn is_down(&self) -> bool {
        self.primary_down
    }

    /// Record a cursor move
    pub fn move_to(&mut self, position: Vec2) -> Option<PointerEvent> {
        self.cursor_position = Some(position);
        self.primary_down.then_some(PointerEvent::Move(position))
    }

    /// Record a button press at the last known cursor position
    pub fn press(&mut self, button: MouseButton) -> Option<PointerEvent> {
        if button != MouseButton::Left || self.primary_down {
            return None;
        }
        let position = self.cursor_position?;
        self.primary_down = true;
        Some(PointerEvent::Down(position))
    }

    /// Record a button release at the last known cursor position
    pub fn release(&mut self, button: MouseButton) -> Option<PointerEvent> {
        if button != MouseButton::Left || !self.primary_down || self.active_touch.is_some() {
            return None;
        }
        self.primary_down = false;
        Some(match self.cursor_position {
            Some(position) => PointerEvent::Up(position),
            None => PointerEvent::Cancel,
        })
    }

    /// Record the cursor leaving the window
    ///
    /// The last position is kept while the button is held so the release can
    /// still be classified; otherwise it is forgotten.
    pub fn leave(&mut self) {
        if !self.primary_down {
            self.cursor_position = None;
        }
    }

    /// Abort the current interaction, if any
    pub fn cancel(&mut self) -> Option<PointerEvent> {
        if !self.primary_down {
            return None;
        }
        self.primary_down = false;
        self.active_touch = None;
        Some(PointerEvent::Cancel)
    }

    // ========== Touch ==========

    /// A finger touched down
    ///
    /// Only the first finger drives an interaction; others are ignored until it lifts.
    pub fn touch_start(&mut self, id: u64, position: Vec2) -> Option<PointerEvent> {
        if self.primary_down {
            return None;
        }
        self.active_touch = Some(id);
        self.cursor_position = Some(position);
        self.primary_down = true;
        Some(PointerEvent::Down(position))
    }

    pub fn touch_move(&mut self, id: u64, position: Vec2) -> Option<PointerEvent> {
        if self.active_touch != Some(id) {
            return None;
        }
        self.move_to(position)
    }

    pub fn touch_end(&mut self, id: u64, position: Vec2) -> Option<PointerEvent> {
        if self.active_touch != Some(id) {
            return None;
        }
        self.active_touch = None;
        self.primary_down = false;
        // A lifted finger has no hover position
        self.cursor_position = None;
        Some(PointerEvent::Up(position))
    }

    pub fn touch_cancel(&mut self, id: u64) -> Option<PointerEvent> {
        if self.active_touch != Some(id) {
            return None;
        }
        self.cursor_position = None;
        self.cancel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_move_release() {
        let mut tracker = PointerTracker::new();

        assert_eq!(tracker.move_to(Vec2::new(5.0, 5.0)), None);
        assert_eq!(
            tracker.press(MouseButton::Left),
            Some(PointerEvent::Down(Vec2::new(5.0, 5.0)))
        );
        assert!(tracker.is_down());
        assert_eq!(
            tracker.move_to(Vec2::new(8.0, 9.0)),
            Some(PointerEvent::Move(Vec2::new(8.0, 9.0)))
        );
        assert_eq!(
            tracker.release(MouseButton::Left),
            Some(PointerEvent::Up(Vec2::new(8.0, 9.0)))
        );
        assert!(!tracker.is_down());
    }

    #[test]
    fn test_secondary_buttons_ignored() {
        let mut tracker = PointerTracker::new();
        tracker.move_to(Vec2::new(1.0, 1.0));

        assert_eq!(tracker.press(MouseButton::Right), None);
        assert_eq!(tracker.release(MouseButton::Right), None);
        assert!(!tracker.is_down());
    }

    #[test]
    fn test_press_without_position_is_dropped() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.press(MouseButton::Left), None);
    }

    #[test]
    fn test_duplicate_press_ignored() {
        let mut tracker = PointerTracker::new();
        tracker.move_to(Vec2::ZERO);
        assert!(tracker.press(MouseButton::Left).is_some());
        assert_eq!(tracker.press(MouseButton::Left), None);
    }

    #[test]
    fn test_leave_keeps_position_while_down() {
        let mut tracker = PointerTracker::new();
        tracker.move_to(Vec2::new(3.0, 4.0));
        tracker.press(MouseButton::Left);
        tracker.leave();

        assert_eq!(
            tracker.release(MouseButton::Left),
            Some(PointerEvent::Up(Vec2::new(3.0, 4.0)))
        );

        tracker.leave();
        assert_eq!(tracker.cursor_position(), None);
    }

    #[test]
    fn test_cancel() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.cancel(), None);

        tracker.move_to(Vec2::ZERO);
        tracker.press(MouseButton::Left);
        assert_eq!(tracker.cancel(), Some(PointerEvent::Cancel));
        assert_eq!(tracker.release(MouseButton::Left), None);
    }

    #[test]
    fn test_first_finger_only() {
        let mut tracker = PointerTracker::new();
        let a = Vec2::new(10.0, 10.0);
        let b = Vec2::new(60.0, 10.0);

        assert_eq!(tracker.touch_start(1, a), Some(PointerEvent::Down(a)));
        assert_eq!(tracker.touch_start(2, b), None);
        assert_eq!(tracker.touch_move(2, b), None);
        assert_eq!(tracker.touch_end(2, b), None);

        assert_eq!(tracker.touch_move(1, b), Some(PointerEvent::Move(b)));
        assert_eq!(tracker.touch_end(1, b), Some(PointerEvent::Up(b)));
        assert!(!tracker.is_down());
        assert_eq!(tracker.cursor_position(), None);
    }

    #[test]
    fn test_touch_cancel() {
        let mut tracker = PointerTracker::new();
        tracker.touch_start(7, Vec2::ZERO);
        assert_eq!(tracker.touch_cancel(3), None);
        assert_eq!(tracker.touch_cancel(7), Some(PointerEvent::Cancel));
        assert!(!tracker.is_down());
    }
}
