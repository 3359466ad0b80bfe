use std::collections::BTreeMap;
use std::time::Duration;

/// One-shot timers keyed by deadline on a virtual clock.
///
/// Time only moves when the owner calls [`pop_due`](Self::pop_due) /
/// [`settle`](Self::settle); the runtime maps real elapsed time onto it.
/// Cancelled entries are removed outright, so they can never fire.
#[derive(Debug)]
pub struct TimerQueue<A> {
    now:     Duration,
    next_id: u64,
    /// Ordered by deadline, then by scheduling order.
    pending: BTreeMap<(Duration, u64), A>,
}

impl<A> Default for TimerQueue<A> {
    fn default() -> Self {
        Self {
            now:     Duration::ZERO,
            next_id: 0,
            pending: BTreeMap::new(),
        }
    }
}

impl<A> TimerQueue<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to fire `delay` after the current virtual time.
    pub fn schedule(&mut self, delay: Duration, action: A) {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.insert((self.now + delay, id), action);
    }

    /// Drop every pending timer.  Returns how many were cancelled.
    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.pending.len();
        self.pending.clear();
        cancelled
    }

    /// Deadline of the earliest pending timer.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.keys().next().map(|&(deadline, _)| deadline)
    }

    /// Remove and return the earliest timer due at or before `now`.
    ///
    /// The clock jumps to that timer's deadline, so anything scheduled from
    /// its callback is relative to the moment it was due.
    pub fn pop_due(&mut self, now: Duration) -> Option<A> {
        let deadline = self.next_deadline()?;
        if deadline > now {
            return None;
        }
        let ((deadline, _), action) = self.pending.pop_first()?;
        self.now = deadline;
        Some(action)
    }

    /// Move the clock forward to `now` once every due timer has been popped.
    pub fn settle(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
