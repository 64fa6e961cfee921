//! Measured button frame and the hit test performed against it

use glam::Vec2;

/// Last known on-screen rectangle of a button
///
/// `origin` is the top-left corner in window space. A default rect is empty,
/// so every point is outside until the first measurement is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundsRect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl BoundsRect {
    pub const ZERO: BoundsRect = BoundsRect {
        origin: Vec2::ZERO,
        size: Vec2::ZERO,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }

    pub fn y(&self) -> f32 {
        self.origin.y
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn is_empty(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Convert a window-space position into this rect's local space
    pub fn to_local(&self, position: Vec2) -> Vec2 {
        position - self.origin
    }

    /// Check whether a local-space point lies strictly inside the rect
    ///
    /// Points on any of the four edges are outside.
    pub fn contains_local(&self, local: Vec2) -> bool {
        local.x > 0.0 && local.x < self.size.x && local.y > 0.0 && local.y < self.size.y
    }

    /// Same as [`contains_local`](Self::contains_local) for a window-space point
    pub fn contains(&self, position: Vec2) -> bool {
        self.contains_local(self.to_local(position))
    }
}
