//! Press/drag/release state machine
//!
//! One interaction is a pointer-down followed by any number of moves and a
//! release (or cancel). While the pointer is inside the bounds the gesture is
//! `Pressed`; dragging out moves it to `PressedOutside`, which still belongs to
//! the same interaction. Releasing outside cancels the action. A press that
//! starts outside the bounds is not an interaction of this button at all.

use crate::{BoundsRect, PointerEvent};
use glam::Vec2;

/// Phase of the press gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No interaction in progress
    #[default]
    Idle,
    /// Pointer down and inside the bounds
    Pressed,
    /// Pointer down but dragged outside the bounds
    PressedOutside,
}

impl GesturePhase {
    /// Whether an interaction is live
    pub fn is_active(self) -> bool {
        !matches!(self, GesturePhase::Idle)
    }
}

/// What a pointer event meant for the button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureSignal {
    /// The pointer entered the pressed-inside state
    TapDown,
    /// The interaction ended with a release inside the bounds
    TapUp,
    /// The interaction ended outside the bounds or was aborted
    Cancelled,
}

/// Result of feeding one event to a [`PressGesture`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureUpdate {
    /// Whether the pressed flag changed
    pub pressed_changed: bool,
    /// Callback-worthy outcome, if any
    pub signal: Option<GestureSignal>,
}

impl GestureUpdate {
    pub const NONE: GestureUpdate = GestureUpdate {
        pressed_changed: false,
        signal: None,
    };
}

/// Press gesture state for a single button
#[derive(Debug, Clone, Default)]
pub struct PressGesture {
    phase: GesturePhase,
}

impl PressGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Whether the pointer is down and inside the bounds
    pub fn is_pressed(&self) -> bool {
        self.phase == GesturePhase::Pressed
    }

    /// Feed a window-space pointer event, hit-tested against `bounds`
    pub fn handle(&mut self, event: &PointerEvent, bounds: &BoundsRect) -> GestureUpdate {
        let inside = |p: Vec2| bounds.contains(p);
        match *event {
            PointerEvent::Down(p) => {
                if self.phase.is_active() {
                    // Only one interaction at a time: a stray down continues the live one
                    log::trace!("pointer down during a live interaction, treated as a move");
                } else if !inside(p) {
                    // The interaction belongs to whatever was hit instead
                    return GestureUpdate::NONE;
                }
                self.track(inside(p))
            }
            PointerEvent::Move(p) => {
                if !self.phase.is_active() {
                    log::trace!("pointer move without an interaction ignored");
                    return GestureUpdate::NONE;
                }
                self.track(inside(p))
            }
            PointerEvent::Up(p) => self.finish(inside(p)),
            PointerEvent::Cancel => self.finish(false),
        }
    }

    /// Down/move while the interaction is live
    fn track(&mut self, inside: bool) -> GestureUpdate {
        let was_pressed = self.is_pressed();
        if inside {
            self.phase = GesturePhase::Pressed;
            GestureUpdate {
                pressed_changed: !was_pressed,
                signal: (!was_pressed).then_some(GestureSignal::TapDown),
            }
        } else {
            self.phase = GesturePhase::PressedOutside;
            GestureUpdate {
                pressed_changed: was_pressed,
                signal: None,
            }
        }
    }

    /// Release or cancel
    fn finish(&mut self, inside: bool) -> GestureUpdate {
        if !self.phase.is_active() {
            log::trace!("pointer release without an interaction ignored");
            return GestureUpdate::NONE;
        }
        let was_pressed = self.is_pressed();
        self.phase = GesturePhase::Idle;
        GestureUpdate {
            pressed_changed: was_pressed,
            signal: Some(if inside {
                GestureSignal::TapUp
            } else {
                GestureSignal::Cancelled
            }),
        }
    }
}
