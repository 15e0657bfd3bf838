//! Single-slot debouncer.
//!
//! # Invariants
//! - Scheduling a new task cancels the pending one.
//! - A task fires at most once, on the first `poll` at or after its deadline.
//! - `cancel` leaves no pending task behind.

use std::time::{Duration, Instant};

/// Identifies one scheduled task. Stale handles never match a newer task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug)]
struct PendingTask<T> {
    handle: TaskHandle,
    due_at: Instant,
    payload: T,
}

/// Delays a payload until a quiet period of `delay` has elapsed.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    next_id: u64,
    pending: Option<PendingTask<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            next_id: 0,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules `payload` to fire at `now + delay`, superseding any pending task.
    pub fn schedule(&mut self, payload: T, now: Instant) -> TaskHandle {
        self.next_id += 1;
        let handle = TaskHandle(self.next_id);
        self.pending = Some(PendingTask {
            handle,
            due_at: now + self.delay,
            payload,
        });
        handle
    }

    /// Drops the pending task and returns its payload.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|task| task.payload)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether `handle` still refers to the pending task.
    pub fn is_current(&self, handle: TaskHandle) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|task| task.handle == handle)
    }

    pub fn due_at(&self) -> Option<Instant> {
        self.pending.as_ref().map(|task| task.due_at)
    }

    pub fn peek(&self) -> Option<&T> {
        self.pending.as_ref().map(|task| &task.payload)
    }

    /// Fires the pending task when its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = self.pending.as_ref().is_some_and(|task| now >= task.due_at);
        if due {
            self.cancel()
        } else {
            None
        }
    }

    /// Fires the pending task immediately, regardless of its deadline.
    pub fn flush(&mut self) -> Option<T> {
        self.cancel()
    }
}

#[cfg(test)]
mod tests {
    use super::Debouncer;
    use std::time::{Duration, Instant};

    const DELAY: Duration = Duration::from_millis(150);

    #[test]
    fn fires_only_after_quiet_period() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.schedule("a", start);

        assert_eq!(debouncer.poll(start + Duration::from_millis(149)), None);
        assert_eq!(debouncer.poll(start + DELAY), Some("a"));
        assert_eq!(debouncer.poll(start + DELAY * 2), None);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn rescheduling_supersedes_pending_task() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        let first = debouncer.schedule(1, start);
        let second = debouncer.schedule(2, start + Duration::from_millis(100));

        assert!(!debouncer.is_current(first));
        assert!(debouncer.is_current(second));
        assert_eq!(debouncer.poll(start + DELAY), None);
        assert_eq!(debouncer.poll(start + Duration::from_millis(250)), Some(2));
    }

    #[test]
    fn cancel_drops_pending_task() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        let handle = debouncer.schedule("x", start);

        assert_eq!(debouncer.cancel(), Some("x"));
        assert!(!debouncer.is_current(handle));
        assert_eq!(debouncer.poll(start + DELAY), None);
        assert_eq!(debouncer.cancel(), None);
    }

    #[test]
    fn flush_ignores_deadline() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.schedule("now", start);
        assert_eq!(debouncer.due_at(), Some(start + DELAY));
        assert_eq!(debouncer.peek(), Some(&"now"));
        assert_eq!(debouncer.flush(), Some("now"));
    }
}
