//! Fire-once timers owned by a game engine.
//!
//! Each engine keeps its own [`Timers`] queue. Scheduling returns a
//! [`TimerId`] that can be cancelled; resetting or dropping the engine drops
//! every pending timer with it, so a callback can never land on a board that
//! has since been reset. Time is passed in explicitly, which keeps the engines
//! deterministic under test.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Pending<T> {
    id: TimerId,
    fire_at: Instant,
    payload: T,
}

#[derive(Debug, Clone)]
pub struct Timers<T> {
    pending: Vec<Pending<T>>,
    next_id: u64,
}

impl<T> Timers<T> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            next_id: 0,
        }
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            fire_at: now + delay,
            payload,
        });
        id
    }

    /// Returns `false` if the timer already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != id);
        self.pending.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|p| p.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Removes and returns every payload due at `now`, earliest first. Timers
    /// sharing a deadline fire in scheduling order.
    pub fn take_due(&mut self, now: Instant) -> Vec<T> {
        let mut due = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].fire_at <= now {
                due.push(self.pending.remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by_key(|p| (p.fire_at, p.id.0));
        due.into_iter().map(|p| p.payload).collect()
    }
}

impl<T> Default for Timers<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_fires_only_when_due() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        timers.schedule(t0, ms(100), "a");

        assert!(timers.take_due(t0 + ms(99)).is_empty());
        assert_eq!(timers.take_due(t0 + ms(100)), vec!["a"]);
        assert!(timers.is_empty());
        assert!(timers.take_due(t0 + ms(500)).is_empty());
    }

    #[test]
    fn test_due_order() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        timers.schedule(t0, ms(300), 3);
        timers.schedule(t0, ms(100), 1);
        timers.schedule(t0, ms(200), 2);
        timers.schedule(t0, ms(100), 10);

        assert_eq!(timers.take_due(t0 + ms(250)), vec![1, 10, 2]);
        assert!(!timers.is_empty());
        assert_eq!(timers.take_due(t0 + ms(300)), vec![3]);
    }

    #[test]
    fn test_cancel() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        let a = timers.schedule(t0, ms(10), 'a');
        let b = timers.schedule(t0, ms(10), 'b');

        assert!(timers.cancel(a));
        assert!(!timers.cancel(a));
        assert!(!timers.is_pending(a));
        assert!(timers.is_pending(b));
        assert_eq!(timers.take_due(t0 + ms(10)), vec!['b']);
        assert!(!timers.cancel(b));
    }

    #[test]
    fn test_cancel_all() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        timers.schedule(t0, ms(10), ());
        timers.schedule(t0, ms(20), ());
        timers.cancel_all();
        assert!(timers.is_empty());
        assert!(timers.take_due(t0 + ms(100)).is_empty());
    }
}
