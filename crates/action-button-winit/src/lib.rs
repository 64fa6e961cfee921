//! # action-button-winit
//!
//! Feeds `winit` window events into [`action_button`].
//!
//! Add [`WinitPointerExt`] to scope and pass every `WindowEvent` to a
//! [`PointerTracker`](action_button::PointerTracker); the returned pointer
//! events go to each button's `handle_pointer`.

mod input;

pub use input::*;
