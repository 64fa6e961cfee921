use crate::color::Color;
use std::time::{Duration, Instant};

/// Easing function type: takes progress (0.0 to 1.0) and returns eased value (0.0 to 1.0)
pub type EasingFn = fn(f32) -> f32;

/// Linear interpolation (no easing)
pub fn linear(t: f32) -> f32 {
    t
}

/// Ease in-out (quadratic) - slow start and end, fast middle
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// Linearly interpolate between two f32 values
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linearly interpolate between two colors
pub fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    Color {
        r: lerp_f32(a.r, b.r, t),
        g: lerp_f32(a.g, b.g, t),
        b: lerp_f32(a.b, b.b, t),
        a: lerp_f32(a.a, b.a, t),
    }
}

/// Values that can be animated by [`Animated`]
pub trait Lerp: Copy + PartialEq {
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(self, to: Self, t: f32) -> Self {
        lerp_f32(self, to, t)
    }
}

impl Lerp for Color {
    fn lerp(self, to: Self, t: f32) -> Self {
        lerp_color(self, to, t)
    }
}

/// Transition configuration
///
/// Defines how long a transition takes and what easing function to use.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    /// Duration in seconds
    pub duration: f32,

    /// Easing function to apply
    pub easing: EasingFn,
}

impl Transition {
    /// Instant transition (no animation, duration = 0)
    pub fn instant() -> Self {
        Self {
            duration: 0.0,
            easing: linear,
        }
    }

    /// Press feedback (100ms, ease-in-out)
    pub fn press() -> Self {
        Self {
            duration: 0.1,
            easing: ease_in_out,
        }
    }

    /// Eased progress after `elapsed`, in [0, 1]
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        let t = (elapsed.as_secs_f32() / self.duration).clamp(0.0, 1.0);
        (self.easing)(t)
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed.as_secs_f32() >= self.duration
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::press()
    }
}

/// A value easing toward a target over a [`Transition`]
///
/// Retargeting mid-flight starts from the value currently displayed, so
/// quick press/release sequences never jump.
#[derive(Debug, Clone, Copy)]
pub struct Animated<T: Lerp> {
    from: T,
    to: T,
    started: Option<Instant>,
    transition: Transition,
}

impl<T: Lerp> Animated<T> {
    /// A value resting at `value`
    pub fn new(value: T, transition: Transition) -> Self {
        Self {
            from: value,
            to: value,
            started: None,
            transition,
        }
    }

    /// Start easing toward `to` at `now`
    pub fn set_target(&mut self, to: T, now: Instant) {
        if to == self.to {
            return;
        }
        self.from = self.value_at(now);
        self.to = to;
        self.started = Some(now);
    }

    /// Jump to `value` without animating
    pub fn snap(&mut self, value: T) {
        self.from = value;
        self.to = value;
        self.started = None;
    }

    /// Displayed value at `now`
    pub fn value_at(&self, now: Instant) -> T {
        match self.started {
            Some(start) => {
                let elapsed = now.saturating_duration_since(start);
                if self.transition.is_finished(elapsed) {
                    return self.to;
                }
                self.from.lerp(self.to, self.transition.progress(elapsed))
            }
            None => self.to,
        }
    }

    /// Whether the value is still moving at `now`
    pub fn is_active(&self, now: Instant) -> bool {
        match self.started {
            Some(start) => !self
                .transition
                .is_finished(now.saturating_duration_since(start)),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_in_out() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert!(ease_in_out(0.25) < 0.25);
        assert_eq!(ease_in_out(0.5), 0.5);
        assert!(ease_in_out(0.75) > 0.75);
        assert_eq!(ease_in_out(1.0), 1.0);
    }

    #[test]
    fn test_lerp_color() {
        let black = Color::rgb(0.0, 0.0, 0.0);
        let white = Color::rgb(1.0, 1.0, 1.0);
        let gray = lerp_color(black, white, 0.5);

        assert_eq!(gray.r, 0.5);
        assert_eq!(gray.g, 0.5);
        assert_eq!(gray.b, 0.5);
    }

    #[test]
    fn test_press_transition_settles() {
        let start = Instant::now();
        let mut scale = Animated::new(1.0_f32, Transition::press());
        scale.set_target(0.9, start);

        assert_eq!(scale.value_at(start), 1.0);
        let mid = scale.value_at(start + Duration::from_millis(50));
        assert!(mid < 1.0 && mid > 0.9);
        assert!(scale.is_active(start + Duration::from_millis(50)));

        let end = start + Duration::from_millis(100);
        assert_eq!(scale.value_at(end), 0.9);
        assert!(!scale.is_active(end));
    }

    #[test]
    fn test_retarget_starts_from_displayed_value() {
        let start = Instant::now();
        let mut scale = Animated::new(1.0_f32, Transition::press());
        scale.set_target(0.9, start);

        let halfway = start + Duration::from_millis(50);
        let shown = scale.value_at(halfway);
        scale.set_target(1.0, halfway);
        assert_eq!(scale.value_at(halfway), shown);
        assert_eq!(scale.value_at(halfway + Duration::from_millis(100)), 1.0);
    }

    #[test]
    fn test_instant_transition() {
        let now = Instant::now();
        let mut value = Animated::new(0.0_f32, Transition::instant());
        value.set_target(1.0, now);
        assert_eq!(value.value_at(now), 1.0);
        assert!(!value.is_active(now));
    }
}
