//! Geometry probe reporting a button's laid-out frame back to the button
//!
//! The host calls [`BoundsProbe::report`] after every layout pass. The write
//! lands in the button's [`BoundsCell`] at the start of the next frame, never
//! during the frame that produced the measurement.

use crate::{BoundsRect, Color, ProbeOverlay, UiContext};
use std::cell::Cell;
use std::rc::Rc;

/// Shared single-threaded cell holding a button's last applied bounds
///
/// The button owns it; probes only receive a [`BoundsSink`] into it.
#[derive(Debug, Clone, Default)]
pub struct BoundsCell(Rc<Cell<BoundsRect>>);

impl BoundsCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently applied bounds
    pub fn get(&self) -> BoundsRect {
        self.0.get()
    }

    /// Write-only handle for a probe
    pub fn sink(&self) -> BoundsSink {
        BoundsSink(self.0.clone())
    }
}

/// Write-only handle into a [`BoundsCell`]
#[derive(Debug, Clone)]
pub struct BoundsSink(Rc<Cell<BoundsRect>>);

impl BoundsSink {
    fn apply(&self, bounds: BoundsRect) {
        self.0.set(bounds);
    }

    fn current(&self) -> BoundsRect {
        self.0.get()
    }
}

/// Measurement helper attached to a button
///
/// Reports within a single frame coalesce: only the last one is applied.
#[derive(Debug, Clone)]
pub struct BoundsProbe {
    sink: BoundsSink,
    pending: Rc<Cell<Option<BoundsRect>>>,
}

impl BoundsProbe {
    pub fn new(sink: BoundsSink) -> Self {
        Self {
            sink,
            pending: Rc::new(Cell::new(None)),
        }
    }

    /// Report the frame computed by the current layout pass
    ///
    /// `frame` is in window space. The write is deferred to the next tick.
    pub fn report(&self, frame: BoundsRect, ctx: &UiContext) {
        let already_scheduled = self.pending.replace(Some(frame)).is_some();
        if already_scheduled {
            return;
        }

        if frame == self.sink.current() {
            // Nothing to apply
            self.pending.set(None);
            return;
        }

        let sink = self.sink.clone();
        let pending = self.pending.clone();
        ctx.defer(move || {
            if let Some(bounds) = pending.take() {
                log::trace!("applying measured bounds {:?}", bounds);
                sink.apply(bounds);
            }
        });
    }

    /// Whether a measurement is waiting for the next tick
    pub fn has_pending(&self) -> bool {
        self.pending.get().is_some()
    }

    /// The probe's own visual: a fully transparent overlay
    pub fn overlay(&self) -> ProbeOverlay {
        ProbeOverlay {
            color: Color::transparent(),
        }
    }
}
