//! Three action buttons stacked in a window.
//!
//! Callbacks are logged; run with `RUST_LOG=debug` to also see gesture
//! transitions. Drawing the `ButtonNode`s is left to a renderer, so the window
//! itself stays blank and the frame descriptions are logged at trace level.

use action_button::{
    ActionButton, ApproxMeasurer, Appearance, BoundsRect, PointerTracker, UiContext,
};
use action_button_winit::WinitPointerExt;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

/// Vertical gap between buttons in logical pixels
const SPACING: f32 = 24.0;

struct App {
    window: Option<Window>,
    ctx: UiContext,
    tracker: PointerTracker,
    buttons: Vec<ActionButton>,
    measurer: ApproxMeasurer,
}

impl App {
    fn new() -> Self {
        let buttons = vec![
            ActionButton::new(Appearance::Red)
                .with_label("Big important button")
                .on_tap_down(|| log::info!("red: tap down"))
                .on_tap_up(|| log::info!("red: tap up")),
            ActionButton::new(Appearance::Blue)
                .with_label("Save")
                .with_icon("icons/save.png")
                .on_tap_up(|| log::info!("blue: saved")),
            // Empty pill
            ActionButton::new(Appearance::Emerald).on_tap_up(|| log::info!("emerald: tap up")),
        ];

        Self {
            window: None,
            ctx: UiContext::new(),
            tracker: PointerTracker::new(),
            buttons,
            measurer: ApproxMeasurer::default(),
        }
    }

    fn frame(&mut self) {
        let Some(window) = &self.window else {
            return;
        };
        let scale_factor = window.scale_factor();
        let size = window.inner_size().to_logical::<f32>(scale_factor);

        self.ctx.begin_frame();

        // Stack the buttons in a centered column
        let nodes: Vec<_> = self.buttons.iter().map(|b| b.node(&self.ctx)).collect();
        let sizes: Vec<_> = nodes
            .iter()
            .map(|n| n.intrinsic_size(&mut self.measurer))
            .collect();
        let total_height = sizes.iter().map(|s| s.y).sum::<f32>()
            + SPACING * sizes.len().saturating_sub(1) as f32;

        let mut y = (size.height - total_height) * 0.5;
        for ((button, node), s) in self.buttons.iter().zip(&nodes).zip(&sizes) {
            let frame = BoundsRect::new((size.width - s.x) * 0.5, y, s.x, s.y);
            button.probe().report(frame, &self.ctx);
            log::trace!("{:?} at {:?}: {:?}", button.appearance(), frame, node);
            y += s.y + SPACING;
        }

        if self.buttons.iter().any(|b| b.is_animating(&self.ctx)) {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title("Action buttons")
            .with_inner_size(winit::dpi::LogicalSize::new(480, 360));

        match event_loop.create_window(attributes) {
            Ok(window) => {
                window.request_redraw();
                self.window = Some(window);
            }
            Err(err) => {
                log::error!("failed to create window: {err}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = &self.window else {
            return;
        };

        if let Some(pointer) = self.tracker.handle_winit_event(&event, window.scale_factor()) {
            // Each event loop callback is a tick: start transitions from now
            self.ctx.begin_frame();
            for button in &mut self.buttons {
                button.handle_pointer(&pointer, &self.ctx);
            }
            window.request_redraw();
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                window.request_redraw();
            }
            WindowEvent::RedrawRequested => self.frame(),
            _ => {}
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new();
    event_loop.run_app(&mut app)?;
    Ok(())
}
