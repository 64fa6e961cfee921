//! Action button component
//!
//! A pill-shaped button that darkens and shrinks while pressed. The press-end
//! action is cancelled when the pointer is dragged out of the button before
//! release.

use crate::{
    Animated, Appearance, BoundsCell, BoundsProbe, BoundsRect, ButtonNode, Color, ContentItem,
    GesturePhase, GestureSignal, Icon, PointerEvent, PressGesture, Shadow, Stroke, Transition,
    UiContext,
};
use crate::style::ButtonMetrics;
use glam::Vec2;

/// A pressable button with separate press-start and press-end callbacks
///
/// # Example
///
/// ```ignore
/// let mut button = ActionButton::new(Appearance::Red)
///     .with_label("Launch")
///     .with_icon("icons/rocket.png")
///     .on_tap_down(|| println!("armed"))
///     .on_tap_up(|| println!("launched"));
///
/// // Every frame:
/// ctx.begin_frame();
/// button.handle_pointer(&event, &ctx);
/// button.probe().report(frame, &ctx);
/// let node = button.node(&ctx);
/// ```
pub struct ActionButton {
    appearance: Appearance,
    label: Option<String>,
    icon: Option<Icon>,
    metrics: ButtonMetrics,
    on_tap_down: Option<Box<dyn FnMut()>>,
    on_tap_up: Option<Box<dyn FnMut()>>,

    gesture: PressGesture,
    bounds: BoundsCell,
    probe: BoundsProbe,
    fill: Animated<Color>,
    scale: Animated<f32>,
}

impl ActionButton {
    pub fn new(appearance: Appearance) -> Self {
        let bounds = BoundsCell::new();
        let probe = BoundsProbe::new(bounds.sink());
        Self {
            appearance,
            label: None,
            icon: None,
            metrics: ButtonMetrics::default(),
            on_tap_down: None,
            on_tap_up: None,
            gesture: PressGesture::new(),
            bounds,
            probe,
            fill: Animated::new(appearance.rest_color(), Transition::press()),
            scale: Animated::new(1.0, Transition::press()),
        }
    }

    /// Set the label shown right of the icon
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the icon shown left of the label
    pub fn with_icon(mut self, icon: impl Into<Icon>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Called each time the pointer enters the pressed-inside state
    pub fn on_tap_down(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_tap_down = Some(Box::new(f));
        self
    }

    /// Called once when the pointer is released inside the button
    pub fn on_tap_up(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_tap_up = Some(Box::new(f));
        self
    }

    // ========== Reconfiguration ==========

    pub fn set_appearance(&mut self, appearance: Appearance) {
        if self.appearance == appearance {
            return;
        }
        self.appearance = appearance;
        self.fill.snap(appearance.fill_color(self.gesture.is_pressed()));
    }

    pub fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    pub fn set_icon(&mut self, icon: Option<Icon>) {
        self.icon = icon;
    }

    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    // ========== State ==========

    /// Whether the pointer is down and inside the button
    pub fn is_pressed(&self) -> bool {
        self.gesture.is_pressed()
    }

    pub fn phase(&self) -> GesturePhase {
        self.gesture.phase()
    }

    /// Bounds currently used for hit-testing
    pub fn bounds(&self) -> BoundsRect {
        self.bounds.get()
    }

    /// Probe the host reports this button's laid-out frame to
    pub fn probe(&self) -> &BoundsProbe {
        &self.probe
    }

    // ========== Input ==========

    /// Feed one window-space pointer event
    ///
    /// Fires the callbacks and starts the press transition as needed. Returns
    /// the gesture outcome, if the event produced one.
    pub fn handle_pointer(
        &mut self,
        event: &PointerEvent,
        ctx: &UiContext,
    ) -> Option<GestureSignal> {
        let bounds = self.bounds.get();
        let update = self.gesture.handle(event, &bounds);

        if update.pressed_changed {
            let pressed = self.gesture.is_pressed();
            self.fill.set_target(self.appearance.fill_color(pressed), ctx.now());
            self.scale.set_target(self.scale_for(pressed), ctx.now());
        }

        match update.signal {
            Some(GestureSignal::TapDown) => {
                log::debug!("{:?} button: tap down", self.appearance);
                if let Some(ref mut on_tap_down) = self.on_tap_down {
                    on_tap_down();
                }
            }
            Some(GestureSignal::TapUp) => {
                log::debug!("{:?} button: tap up", self.appearance);
                if let Some(ref mut on_tap_up) = self.on_tap_up {
                    on_tap_up();
                }
            }
            Some(GestureSignal::Cancelled) => {
                log::debug!("{:?} button: press cancelled", self.appearance);
            }
            None => {}
        }

        update.signal
    }

    // ========== Rendering ==========

    /// Build the render description for the current frame
    pub fn node(&self, ctx: &UiContext) -> ButtonNode {
        let now = ctx.now();
        let m = &self.metrics;

        let mut content = Vec::with_capacity(2);
        if let Some(icon) = &self.icon {
            content.push(ContentItem::Icon {
                icon: icon.clone(),
                size: Vec2::splat(m.icon_size),
                trailing_gap: m.icon_gap,
            });
        }
        if let Some(label) = &self.label {
            content.push(ContentItem::Label {
                text: label.clone(),
                font: m.font,
                color: m.label_color,
            });
        }

        ButtonNode {
            fill: self.fill.value_at(now),
            stroke: Stroke::new(m.border_width, self.appearance.border_color()),
            corner_radius: m.corner_radius,
            shadow: Shadow {
                color: self.appearance.rest_color().with_alpha(m.shadow_opacity),
                radius: m.shadow_radius,
                offset: m.shadow_offset,
            },
            scale: self.scale.value_at(now),
            padding: m.padding,
            content,
            overlay: self.probe.overlay(),
            pressed: self.gesture.is_pressed(),
        }
    }

    /// Whether the press transition is still running, i.e. more frames are needed
    pub fn is_animating(&self, ctx: &UiContext) -> bool {
        let now = ctx.now();
        self.fill.is_active(now) || self.scale.is_active(now)
    }

    fn scale_for(&self, pressed: bool) -> f32 {
        if pressed {
            self.metrics.pressed_scale
        } else {
            1.0
        }
    }
}

impl std::fmt::Debug for ActionButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionButton")
            .field("appearance", &self.appearance)
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("phase", &self.gesture.phase())
            .field("bounds", &self.bounds.get())
            .finish_non_exhaustive()
    }
}
