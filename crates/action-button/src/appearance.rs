//! Color themes for the action button
//!
//! Every appearance maps to a fixed triple of rest fill, pressed fill and
//! border color.

use crate::color::{tailwind, Color};

/// Named color theme of an [`ActionButton`](crate::ActionButton)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Appearance {
    Red,
    Blue,
    Emerald,
}

impl Appearance {
    /// All appearances, in declaration order
    pub const ALL: [Appearance; 3] = [Appearance::Red, Appearance::Blue, Appearance::Emerald];

    /// Fill color while the button is not pressed
    pub const fn rest_color(self) -> Color {
        match self {
            Appearance::Red => tailwind::RED_500,
            Appearance::Blue => tailwind::BLUE_500,
            Appearance::Emerald => tailwind::EMERALD_500,
        }
    }

    /// Fill color while the pointer is down inside the button
    pub const fn pressed_color(self) -> Color {
        match self {
            Appearance::Red => tailwind::RED_600,
            Appearance::Blue => tailwind::BLUE_600,
            Appearance::Emerald => tailwind::EMERALD_600,
        }
    }

    /// Border color, the same in every state
    pub const fn border_color(self) -> Color {
        match self {
            Appearance::Red => tailwind::RED_600,
            Appearance::Blue => tailwind::BLUE_600,
            Appearance::Emerald => tailwind::EMERALD_600,
        }
    }

    /// Fill color for the given pressed flag
    pub const fn fill_color(self, pressed: bool) -> Color {
        if pressed {
            self.pressed_color()
        } else {
            self.rest_color()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_differs_from_pressed() {
        for appearance in Appearance::ALL {
            assert_ne!(appearance.rest_color(), appearance.pressed_color());
        }
    }

    #[test]
    fn test_border_matches_pressed() {
        for appearance in Appearance::ALL {
            assert_eq!(appearance.pressed_color(), appearance.border_color());
        }
    }

    #[test]
    fn test_fill_color() {
        let a = Appearance::Emerald;
        assert_eq!(a.fill_color(false), a.rest_color());
        assert_eq!(a.fill_color(true), a.pressed_color());
    }
}
