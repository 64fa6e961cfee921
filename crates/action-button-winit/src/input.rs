//! Winit input adapter for action-button
//!
//! Converts winit mouse and touch events into the backend-agnostic
//! [`PointerEvent`] stream. Positions are reported in logical pixels.

use action_button::{MouseButton, PointerEvent, PointerTracker};
use glam::Vec2;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, TouchPhase, WindowEvent};

/// Extension trait for PointerTracker to handle winit events
pub trait WinitPointerExt {
    /// Process a winit WindowEvent
    ///
    /// `scale_factor` is the window's current scale factor, used to convert
    /// physical positions to logical ones. Returns the pointer event the
    /// window event amounts to, if any.
    fn handle_winit_event(&mut self, event: &WindowEvent, scale_factor: f64)
        -> Option<PointerEvent>;
}

impl WinitPointerExt for PointerTracker {
    fn handle_winit_event(
        &mut self,
        event: &WindowEvent,
        scale_factor: f64,
    ) -> Option<PointerEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.move_to(logical(*position, scale_factor))
            }
            WindowEvent::CursorLeft { .. } => {
                self.leave();
                None
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = convert_mouse_button(*button);
                match state {
                    ElementState::Pressed => self.press(button),
                    ElementState::Released => self.release(button),
                }
            }
            WindowEvent::Touch(touch) => {
                let position = logical(touch.location, scale_factor);
                match touch.phase {
                    TouchPhase::Started => self.touch_start(touch.id, position),
                    TouchPhase::Moved => self.touch_move(touch.id, position),
                    TouchPhase::Ended => self.touch_end(touch.id, position),
                    TouchPhase::Cancelled => self.touch_cancel(touch.id),
                }
            }
            WindowEvent::Focused(false) => {
                let cancelled = self.cancel();
                if cancelled.is_some() {
                    log::debug!("window lost focus during a press, cancelling");
                }
                cancelled
            }
            _ => None,
        }
    }
}

/// Convert a physical window position to a logical-pixel vector
pub fn logical(position: PhysicalPosition<f64>, scale_factor: f64) -> Vec2 {
    let logical = position.to_logical::<f32>(scale_factor);
    Vec2::new(logical.x, logical.y)
}

/// Convert winit MouseButton to action-button MouseButton
pub fn convert_mouse_button(button: winit::event::MouseButton) -> MouseButton {
    match button {
        winit::event::MouseButton::Left => MouseButton::Left,
        winit::event::MouseButton::Right => MouseButton::Right,
        winit::event::MouseButton::Middle => MouseButton::Middle,
        winit::event::MouseButton::Back => MouseButton::Other(3),
        winit::event::MouseButton::Forward => MouseButton::Other(4),
        winit::event::MouseButton::Other(n) => MouseButton::Other(n as u8),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::event::{DeviceId, Touch};

    fn device() -> DeviceId {
        unsafe { DeviceId::dummy() }
    }

    fn cursor_moved(x: f64, y: f64) -> WindowEvent {
        WindowEvent::CursorMoved {
            device_id: device(),
            position: PhysicalPosition::new(x, y),
        }
    }

    fn left(state: ElementState) -> WindowEvent {
        WindowEvent::MouseInput {
            device_id: device(),
            state,
            button: winit::event::MouseButton::Left,
        }
    }

    fn touch(id: u64, phase: TouchPhase, x: f64, y: f64) -> WindowEvent {
        WindowEvent::Touch(Touch {
            device_id: device(),
            phase,
            location: PhysicalPosition::new(x, y),
            force: None,
            id,
        })
    }

    #[test]
    fn test_mouse_click_sequence() {
        let mut tracker = PointerTracker::new();

        assert_eq!(tracker.handle_winit_event(&cursor_moved(10.0, 20.0), 1.0), None);
        assert_eq!(
            tracker.handle_winit_event(&left(ElementState::Pressed), 1.0),
            Some(PointerEvent::Down(Vec2::new(10.0, 20.0)))
        );
        assert_eq!(
            tracker.handle_winit_event(&cursor_moved(30.0, 20.0), 1.0),
            Some(PointerEvent::Move(Vec2::new(30.0, 20.0)))
        );
        assert_eq!(
            tracker.handle_winit_event(&left(ElementState::Released), 1.0),
            Some(PointerEvent::Up(Vec2::new(30.0, 20.0)))
        );
    }

    #[test]
    fn test_positions_are_logical() {
        let mut tracker = PointerTracker::new();
        tracker.handle_winit_event(&cursor_moved(200.0, 100.0), 2.0);
        assert_eq!(
            tracker.handle_winit_event(&left(ElementState::Pressed), 2.0),
            Some(PointerEvent::Down(Vec2::new(100.0, 50.0)))
        );
    }

    #[test]
    fn test_focus_loss_cancels() {
        let mut tracker = PointerTracker::new();
        tracker.handle_winit_event(&cursor_moved(1.0, 1.0), 1.0);
        tracker.handle_winit_event(&left(ElementState::Pressed), 1.0);
        assert_eq!(
            tracker.handle_winit_event(&WindowEvent::Focused(false), 1.0),
            Some(PointerEvent::Cancel)
        );
    }

    #[test]
    fn test_touch_sequence() {
        let mut tracker = PointerTracker::new();
        assert_eq!(
            tracker.handle_winit_event(&touch(1, TouchPhase::Started, 4.0, 4.0), 2.0),
            Some(PointerEvent::Down(Vec2::new(2.0, 2.0)))
        );
        assert_eq!(
            tracker.handle_winit_event(&touch(2, TouchPhase::Started, 8.0, 8.0), 2.0),
            None
        );
        assert_eq!(
            tracker.handle_winit_event(&touch(1, TouchPhase::Cancelled, 4.0, 4.0), 2.0),
            Some(PointerEvent::Cancel)
        );
    }

    #[test]
    fn test_secondary_button_ignored() {
        let mut tracker = PointerTracker::new();
        tracker.handle_winit_event(&cursor_moved(1.0, 1.0), 1.0);
        let right = WindowEvent::MouseInput {
            device_id: device(),
            state: ElementState::Pressed,
            button: winit::event::MouseButton::Right,
        };
        assert_eq!(tracker.handle_winit_event(&right, 1.0), None);
    }
}
