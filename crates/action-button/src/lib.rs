//! # action-button
//!
//! Backend agnostic pressable button.
//!
//! The button darkens and shrinks while pressed, fires a callback when the
//! press begins and another when it is released inside the button. Dragging
//! out before releasing cancels the release action.
//!
//! ## Core Types
//!
//! - [`ActionButton`] - The button component
//! - [`Appearance`] - Color theme (red, blue, emerald)
//! - [`ButtonNode`] - Render description produced every frame
//! - [`UiContext`] - Frame clock and deferred task queue
//!
//! ## Input & Gestures
//!
//! - [`PointerTracker`] - Turns raw cursor/button/touch changes into pointer events
//! - [`PointerEvent`] - Down, move, up or cancel of the single active pointer
//! - [`PressGesture`] - Press/drag/release state machine
//!
//! ## Geometry
//!
//! - [`BoundsRect`] - Measured frame used for hit-testing
//! - [`BoundsProbe`] - Reports the laid-out frame back to the button on the next tick
//! - [`TickQueue`] - Work deferred to the next frame

mod appearance;
mod button;
mod color;
mod context;
mod geometry;
mod gesture;
mod input;
mod measure;
mod node;
mod probe;
mod scheduler;
mod style;
pub mod transition;

// Core types
pub use appearance::*;
pub use button::*;
pub use color::*;
pub use context::*;
pub use node::*;
pub use transition::*;

// Input & Gestures
pub use gesture::*;
pub use input::*;

// Geometry
pub use geometry::*;
pub use measure::*;
pub use probe::*;
pub use scheduler::*;
