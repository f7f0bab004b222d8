//! Surprise spinner: a randomized wait, a uniform pick, then a short pause
//! before the pick is handed over.

use super::random::{between, choose, RandomSource};
use super::timer::Timers;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinTiming {
    pub min_spin: Duration,
    pub max_spin: Duration,
    pub reveal: Duration,
}

impl Default for SpinTiming {
    fn default() -> Self {
        Self {
            min_spin: Duration::from_millis(1200),
            max_spin: Duration::from_millis(2000),
            reveal: Duration::from_millis(700),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpinnerTimer {
    Settle,
    Reveal,
}

#[derive(Debug)]
pub struct Spinner<T> {
    spinning: bool,
    result: Option<T>,
    candidates: Vec<T>,
    timing: SpinTiming,
    timers: Timers<SpinnerTimer>,
}

impl<T: Copy + std::fmt::Debug> Spinner<T> {
    pub fn new(timing: SpinTiming) -> Self {
        Self {
            spinning: false,
            result: None,
            candidates: Vec::new(),
            timing,
            timers: Timers::new(),
        }
    }

    pub fn is_spinning(&self) -> bool {
        self.spinning
    }

    pub fn result(&self) -> Option<T> {
        self.result
    }

    /// A spin is underway or its pick has not been handed over yet.
    pub fn in_flight(&self) -> bool {
        !self.timers.is_empty()
    }

    /// Starts a spin. Ignored while a spin is in flight or with nothing to
    /// pick from. Returns whether a spin started.
    pub fn spin<R: RandomSource + ?Sized>(&mut self, now: Instant, candidates: &[T], rng: &mut R) -> bool {
        if self.in_flight() || candidates.is_empty() {
            return false;
        }
        let min = self.timing.min_spin.as_millis() as u64;
        let max = self.timing.max_spin.as_millis() as u64;
        let wait = Duration::from_millis(between(rng, min, max));

        self.spinning = true;
        self.result = None;
        self.candidates = candidates.to_vec();
        self.timers.schedule(now, wait, SpinnerTimer::Settle);
        debug!(?wait, candidates = candidates.len(), "spin started");
        true
    }

    /// Fires due timers. Returns the pick once it is ready to be acted on.
    pub fn tick<R: RandomSource + ?Sized>(&mut self, now: Instant, rng: &mut R) -> Option<T> {
        let mut chosen = None;
        for timer in self.timers.take_due(now) {
            trace!(?timer, "spinner timer fired");
            match timer {
                SpinnerTimer::Settle => {
                    self.spinning = false;
                    self.result = choose(rng, &self.candidates).copied();
                    debug!(result = ?self.result, "spinner settled");
                    if self.result.is_some() {
                        self.timers.schedule(now, self.timing.reveal, SpinnerTimer::Reveal);
                    }
                }
                SpinnerTimer::Reveal => chosen = self.result,
            }
        }
        chosen
    }
}
