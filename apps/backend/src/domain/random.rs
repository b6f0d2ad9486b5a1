//! Injectable randomness for question shuffles and turn picks.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform indices. The only randomness the game uses.
pub trait RandomSource: Send {
    /// Uniform index in `0..bound`. Callers never pass `bound == 0`.
    fn index_below(&mut self, bound: usize) -> usize;
}

/// ChaCha-backed source; reproducible when built from a seed.
pub struct SeededRandom {
    rng: ChaCha8Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_os_rng() -> Self {
        Self {
            rng: ChaCha8Rng::from_os_rng(),
        }
    }

    /// Seeded when `seed` is given, OS entropy otherwise.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_os_rng(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn index_below(&mut self, bound: usize) -> usize {
        self.rng.random_range(0..bound)
    }
}

/// In-place Fisher-Yates shuffle.
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let j = rng.index_below(i + 1);
        items.swap(i, j);
    }
}

/// Replays a fixed list of indices, clamped to the requested bound.
#[cfg(test)]
pub(crate) struct ScriptedRandom {
    picks: std::collections::VecDeque<usize>,
}

#[cfg(test)]
impl ScriptedRandom {
    pub(crate) fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }

    /// Always picks index 0: shuffles become a fixed rotation and turn picks
    /// take the queue head.
    pub(crate) fn first() -> Self {
        Self::new([])
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn index_below(&mut self, bound: usize) -> usize {
        self.picks.pop_front().unwrap_or(0).min(bound - 1)
    }
}
