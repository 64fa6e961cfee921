//! UI context for the frame lifecycle
//!
//! The `UiContext` holds the per-frame plumbing components need:
//! - the frame clock used to sample transitions
//! - the tick queue for writes deferred to the next frame

use crate::TickQueue;
use std::time::Instant;

/// Frame coordinator passed to components while handling input and rendering
///
/// # Example
///
/// ```ignore
/// // In the host's frame loop:
/// ctx.begin_frame();
///
/// for event in pointer_events {
///     button.handle_pointer(&event, &ctx);
/// }
///
/// button.probe().report(frame_from_layout, &ctx);
/// let node = button.node(&ctx);
/// ```
#[derive(Debug)]
pub struct UiContext {
    /// Deferred tasks, flushed at the start of each frame
    queue: TickQueue,

    /// Timestamp of the current frame
    now: Instant,

    /// Number of frames begun so far
    frame: u64,
}

impl UiContext {
    pub fn new() -> Self {
        Self {
            queue: TickQueue::new(),
            now: Instant::now(),
            frame: 0,
        }
    }

    // ========== Frame Lifecycle ==========

    /// Begin a new frame at the current time
    pub fn begin_frame(&mut self) {
        self.begin_frame_at(Instant::now());
    }

    /// Begin a new frame at an explicit time
    ///
    /// Runs the tasks deferred during the previous frame, so measurements
    /// reported then become visible now.
    pub fn begin_frame_at(&mut self, now: Instant) {
        self.now = now;
        self.frame += 1;
        let ran = self.queue.run_pending();
        if ran > 0 {
            log::trace!("frame {}: ran {} deferred task(s)", self.frame, ran);
        }
    }

    /// Timestamp of the current frame
    pub fn now(&self) -> Instant {
        self.now
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Queue for work that must wait until the next frame
    pub fn queue(&self) -> &TickQueue {
        &self.queue
    }

    /// Schedule a task for the start of the next frame
    pub fn defer(&self, task: impl FnOnce() + 'static) {
        self.queue.defer(task);
    }
}

impl Default for UiContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    #[test]
    fn test_begin_frame_flushes_deferred() {
        let mut ctx = UiContext::new();
        let flag = Rc::new(Cell::new(false));

        let f = flag.clone();
        ctx.defer(move || f.set(true));
        assert!(!flag.get());

        ctx.begin_frame();
        assert!(flag.get());
        assert_eq!(ctx.frame(), 1);
    }

    #[test]
    fn test_begin_frame_at_sets_clock() {
        let mut ctx = UiContext::new();
        let later = ctx.now() + Duration::from_millis(16);
        ctx.begin_frame_at(later);
        assert_eq!(ctx.now(), later);
    }
}
