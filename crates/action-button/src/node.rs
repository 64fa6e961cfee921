//! Backend-agnostic render description of a button
//!
//! [`ActionButton::node`](crate::ActionButton::node) produces a [`ButtonNode`]
//! every frame. Renderers draw it back to front: shadow, pill fill, border,
//! content row, then the probe overlay.

use crate::color::Color;
use glam::Vec2;

/// Reference to an image asset, resolved by the renderer
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Icon {
    pub source: String,
}

impl Icon {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

impl From<&str> for Icon {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<String> for Icon {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}

/// Generic font family, mapped to a concrete face by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFamily {
    SansSerif,
    Monospace,
}

/// Numeric font weight, 100 (thin) to 900 (black)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const BOLD: FontWeight = FontWeight(700);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub family: FontFamily,
    pub weight: FontWeight,
    /// Size in logical pixels
    pub size: f32,
}

impl Font {
    pub const fn new(family: FontFamily, weight: FontWeight, size: f32) -> Self {
        Self {
            family,
            weight,
            size,
        }
    }
}

/// Stroke definition with width and color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

/// Drop shadow behind the pill
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub color: Color,
    /// Blur radius in logical pixels
    pub radius: f32,
    pub offset: Vec2,
}

/// One entry of the horizontal content row
#[derive(Debug, Clone, PartialEq)]
pub enum ContentItem {
    Icon {
        icon: Icon,
        size: Vec2,
        /// Space between the icon and whatever follows it
        trailing_gap: f32,
    },
    Label {
        text: String,
        font: Font,
        color: Color,
    },
}

/// Transparent overlay left by the bounds probe
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeOverlay {
    pub color: Color,
}

/// Everything needed to draw a button for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonNode {
    pub fill: Color,
    pub stroke: Stroke,
    /// Corner radius; renderers clamp it to half the height, giving a pill
    pub corner_radius: f32,
    pub shadow: Shadow,
    /// Uniform scale around the center
    pub scale: f32,
    pub padding: f32,
    /// Icon first, then label; either may be missing
    pub content: Vec<ContentItem>,
    pub overlay: ProbeOverlay,
    /// Pressed flag the visuals are heading toward
    pub pressed: bool,
}

impl ButtonNode {
    /// Whether the pill has neither icon nor label
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn icon(&self) -> Option<&Icon> {
        self.content.iter().find_map(|item| match item {
            ContentItem::Icon { icon, .. } => Some(icon),
            _ => None,
        })
    }

    pub fn label(&self) -> Option<&str> {
        self.content.iter().find_map(|item| match item {
            ContentItem::Label { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
