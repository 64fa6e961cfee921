//! Intrinsic content measurement
//!
//! Layout belongs to the host, but it needs the button's natural size to place
//! it. [`ButtonNode::intrinsic_size`] sums up the content row with a
//! [`ContentMeasurer`] supplied by the host's text engine.

use crate::node::{ButtonNode, ContentItem, Font, FontFamily};
use action_button_macros::WithBuilders;
use glam::Vec2;

/// Backend-agnostic text measurement.
///
/// Implementors return the bounding box of a single line of shaped text,
/// excluding any padding.
pub trait ContentMeasurer {
    fn measure_text(&mut self, text: &str, font: &Font) -> Vec2;
}

/// Fixed-advance approximation, good enough for monospaced labels and tests
///
/// ```ignore
/// let mut measurer = ApproxMeasurer::default().with_advance(0.55);
/// let size = node.intrinsic_size(&mut measurer);
/// ```
#[derive(Debug, Clone, Copy, WithBuilders)]
pub struct ApproxMeasurer {
    /// Glyph advance as a multiple of the font size
    pub advance: f32,
    /// Line height as a multiple of the font size
    pub line_height: f32,
}

impl Default for ApproxMeasurer {
    fn default() -> Self {
        Self {
            advance: 0.6,
            line_height: 1.2,
        }
    }
}

impl ContentMeasurer for ApproxMeasurer {
    fn measure_text(&mut self, text: &str, font: &Font) -> Vec2 {
        let advance = match font.family {
            FontFamily::Monospace => self.advance,
            // Proportional faces average a bit narrower
            FontFamily::SansSerif => self.advance * 0.9,
        };
        Vec2::new(
            text.chars().count() as f32 * font.size * advance,
            font.size * self.line_height,
        )
    }
}

impl ButtonNode {
    /// Unscaled size of the pill: content row plus padding on every side
    pub fn intrinsic_size(&self, measurer: &mut dyn ContentMeasurer) -> Vec2 {
        let mut row = Vec2::ZERO;
        for item in &self.content {
            let size = match item {
                ContentItem::Icon {
                    size, trailing_gap, ..
                } => Vec2::new(size.x + trailing_gap, size.y),
                ContentItem::Label { text, font, .. } => measurer.measure_text(text, font),
            };
            row.x += size.x;
            row.y = row.y.max(size.y);
        }
        row + Vec2::splat(self.padding * 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ActionButton, Appearance, UiContext};

    #[test]
    fn test_empty_pill_is_padding_only() {
        let node = ActionButton::new(Appearance::Red).node(&UiContext::new());
        let size = node.intrinsic_size(&mut ApproxMeasurer::default());
        assert_eq!(size, Vec2::splat(32.0));
    }

    #[test]
    fn test_icon_and_label_row() {
        let node = ActionButton::new(Appearance::Red)
            .with_icon("star.png")
            .with_label("Hello")
            .node(&UiContext::new());
        let mut measurer = ApproxMeasurer::default()
            .with_advance(0.5)
            .with_line_height(1.0);
        // icon 24 + gap 8 + 5 glyphs * 18 * 0.5, height max(24, 18), padding 16 each side
        let size = node.intrinsic_size(&mut measurer);
        assert_eq!(size, Vec2::new(24.0 + 8.0 + 45.0 + 32.0, 24.0 + 32.0));
    }
}
