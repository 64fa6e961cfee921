use crate::color::{tailwind, Color};
use crate::node::{Font, FontFamily, FontWeight};
use glam::Vec2;

/// Fixed dimensions of an action button
///
/// Colors come from the [`Appearance`](crate::Appearance); everything else
/// about the look lives here. None of it is configurable per button.
#[derive(Debug, Clone)]
pub(crate) struct ButtonMetrics {
    /// Padding around the content row, all sides
    pub padding: f32,
    /// Corner radius, large enough to always produce a pill
    pub corner_radius: f32,
    pub border_width: f32,
    /// Edge length of the square icon
    pub icon_size: f32,
    /// Gap between icon and label
    pub icon_gap: f32,
    pub font: Font,
    pub label_color: Color,
    /// Scale applied while pressed
    pub pressed_scale: f32,
    /// Opacity of the rest-colored shadow
    pub shadow_opacity: f32,
    /// Shadow blur radius
    pub shadow_radius: f32,
    pub shadow_offset: Vec2,
}

impl Default for ButtonMetrics {
    fn default() -> Self {
        Self {
            padding: 16.0,
            corner_radius: 100.0,
            border_width: 2.0,
            icon_size: 24.0,
            icon_gap: 8.0,
            font: Font::new(FontFamily::Monospace, FontWeight::BOLD, 18.0),
            label_color: tailwind::WHITE,
            pressed_scale: 0.9,
            // Opaque: the shadow is a glow in the rest color
            shadow_opacity: 1.0,
            shadow_radius: 24.0,
            shadow_offset: Vec2::new(0.0, 2.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_dimensions() {
        let m = ButtonMetrics::default();
        assert_eq!(m.border_width, 2.0);
        assert_eq!(m.icon_size, 24.0);
        assert_eq!(m.pressed_scale, 0.9);
        assert_eq!(m.shadow_radius, 24.0);
        assert_eq!(m.shadow_offset, Vec2::new(0.0, 2.0));
        assert_eq!(m.font.size, 18.0);
        assert_eq!(m.font.weight, FontWeight::BOLD);
    }
}
