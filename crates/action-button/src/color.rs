/// RGBA color in linear space with values in [0, 1]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    pub const fn transparent() -> Self {
        Self::rgba(0.0, 0.0, 0.0, 0.0)
    }

    /// Convert sRGB color (0-255) to linear space
    #[inline]
    pub const fn srgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        const fn srgb_to_linear(c: u8) -> f32 {
            let x = c as f32 / 255.0;
            if x <= 0.04045 {
                x / 12.92
            } else {
                // Polynomial approximation of ((x + 0.055) / 1.055)^2.4
                let t = (x + 0.055) / 1.055;
                t * t * (0.5870 * t + 0.4130)
            }
        }

        Self::rgba(
            srgb_to_linear(r),
            srgb_to_linear(g),
            srgb_to_linear(b),
            a as f32 / 255.0,
        )
    }

    /// Opaque sRGB color (0-255)
    #[inline]
    pub const fn srgb(r: u8, g: u8, b: u8) -> Self {
        Self::srgba(r, g, b, 255)
    }

    /// with alpha builder method taking f32, clamped to [0, 1]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha.clamp(0.0, 1.0);
        self
    }

    /// Whether the color has no visible contribution
    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }
}

/// Tailwind palette entries used by the button appearances
pub mod tailwind {
    use super::Color;

    pub const WHITE: Color = Color::srgb(255, 255, 255);

    pub const RED_500: Color = Color::srgb(239, 68, 68);
    pub const RED_600: Color = Color::srgb(220, 38, 38);

    pub const BLUE_500: Color = Color::srgb(59, 130, 246);
    pub const BLUE_600: Color = Color::srgb(37, 99, 235);

    pub const EMERALD_500: Color = Color::srgb(16, 185, 129);
    pub const EMERALD_600: Color = Color::srgb(5, 150, 105);
}
