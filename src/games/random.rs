//! Uniform random source injected into the game engines.
//!
//! Engines never reach for an ambient RNG. Everything random (deck shuffles,
//! opponent moves, spinner delays and picks) is drawn from a [`RandomSource`]
//! handed in by the caller, so a fixed seed replays a session exactly.

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Uniform integer generator.
pub trait RandomSource {
    /// Returns a uniformly distributed integer in `0..bound`.
    ///
    /// `bound` must be non-zero.
    fn below(&mut self, bound: usize) -> usize;
}

/// Seedable source backed by the standard RNG.
#[derive(Debug)]
pub struct SeededRandom {
    inner: StdRng,
    seed: u64,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seeds from the thread RNG. The chosen seed is kept so it can be logged
    /// and replayed through the config file.
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn below(&mut self, bound: usize) -> usize {
        self.inner.random_range(0..bound)
    }
}

/// Uniform integer in the inclusive range `low..=high`.
pub fn between<R: RandomSource + ?Sized>(rng: &mut R, low: u64, high: u64) -> u64 {
    if high <= low {
        return low;
    }
    let span = (high - low) as usize + 1;
    low + rng.below(span) as u64
}

/// Picks one element uniformly. `None` for an empty slice.
pub fn choose<'a, T, R: RandomSource + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.below(items.len()))
}

/// Fisher-Yates shuffle: walks from the last index down to 1, swapping each
/// slot with a uniform index in `[0, i]`.
pub fn shuffle<T, R: RandomSource + ?Sized>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.below(i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::RandomSource;
    use std::collections::VecDeque;

    /// Replays a fixed script of draws, each reduced modulo the bound.
    /// Falls back to 0 once the script runs out.
    pub struct ScriptedRandom {
        script: VecDeque<usize>,
    }

    impl ScriptedRandom {
        pub fn new(script: &[usize]) -> Self {
            Self {
                script: script.iter().copied().collect(),
            }
        }
    }

    impl RandomSource for ScriptedRandom {
        fn below(&mut self, bound: usize) -> usize {
            self.script.pop_front().unwrap_or(0) % bound
        }
    }
}
