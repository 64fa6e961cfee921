//! Deferred work for the next frame
//!
//! State that drives the current frame must not be written while that frame is
//! being built. Writers schedule a task on a [`TickQueue`] instead, and the host
//! flushes the queue at the start of the next frame (see
//! [`UiContext::begin_frame`](crate::UiContext::begin_frame)).

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

type Task = Box<dyn FnOnce()>;

/// Single-threaded FIFO of tasks deferred to the next tick
///
/// Cloning yields another handle to the same queue.
#[derive(Clone, Default)]
pub struct TickQueue {
    tasks: Rc<RefCell<VecDeque<Task>>>,
}

impl TickQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a task for the next tick
    pub fn defer(&self, task: impl FnOnce() + 'static) {
        self.tasks.borrow_mut().push_back(Box::new(task));
    }

    /// Run every task that was queued before this call
    ///
    /// Tasks deferred while the batch runs are kept for the following tick.
    /// Returns the number of tasks that ran.
    pub fn run_pending(&self) -> usize {
        // Take the batch first so tasks can defer more work without a double borrow
        let batch = std::mem::take(&mut *self.tasks.borrow_mut());
        let count = batch.len();
        for task in batch {
            task();
        }
        count
    }

    /// Number of tasks waiting for the next tick
    pub fn len(&self) -> usize {
        self.tasks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.borrow().is_empty()
    }
}

impl fmt::Debug for TickQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TickQueue")
            .field("pending", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_tasks_run_on_flush_only() {
        let queue = TickQueue::new();
        let hits = Rc::new(Cell::new(0));

        let h = hits.clone();
        queue.defer(move || h.set(h.get() + 1));
        assert_eq!(hits.get(), 0);
        assert_eq!(queue.len(), 1);

        assert_eq!(queue.run_pending(), 1);
        assert_eq!(hits.get(), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_nested_defer_lands_in_next_tick() {
        let queue = TickQueue::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let q = queue.clone();
        let o = order.clone();
        queue.defer(move || {
            o.borrow_mut().push("first");
            let o = o.clone();
            q.defer(move || o.borrow_mut().push("second"));
        });

        assert_eq!(queue.run_pending(), 1);
        assert_eq!(*order.borrow(), vec!["first"]);
        assert_eq!(queue.run_pending(), 1);
        assert_eq!(*order.borrow(), vec!["first", "second"]);
        assert_eq!(queue.run_pending(), 0);
    }
}
