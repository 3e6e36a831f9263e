//! Injectable random source for the walk. All draws go through [`WalkRng`] so
//! a fixed seed (or a scripted sequence in tests) reproduces a level exactly.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

pub trait WalkRng {
    fn next_raw(&mut self) -> u64;

    /// Uniform draw from `[min, max)`; yields `min` when the range is empty.
    fn range(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        let span = u64::from(max - min);
        min + (self.next_raw() % span) as u32
    }

    /// Uniform draw from `[min, max]`.
    fn range_inclusive(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        let span = u64::from(max - min) + 1;
        min + (self.next_raw() % span) as u32
    }

    /// Bernoulli draw. `0.0` never succeeds and `1.0` always does.
    fn chance(&mut self, probability: f32) -> bool {
        let unit = (self.next_raw() >> 11) as f64 / (1_u64 << 53) as f64;
        unit < f64::from(probability)
    }

    fn pick<T: Copy>(&mut self, candidates: &[T]) -> Option<T> {
        if candidates.is_empty() {
            return None;
        }
        let index = (self.next_raw() % candidates.len() as u64) as usize;
        Some(candidates[index])
    }
}

impl WalkRng for ChaCha8Rng {
    fn next_raw(&mut self) -> u64 {
        self.next_u64()
    }
}

impl<R: WalkRng + ?Sized> WalkRng for &mut R {
    fn next_raw(&mut self) -> u64 {
        (**self).next_raw()
    }
}

pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Replays a fixed word sequence, cycling when exhausted.
#[cfg(test)]
#[derive(Clone, Debug)]
pub(crate) struct ScriptedRng {
    words: Vec<u64>,
    cursor: usize,
}

#[cfg(test)]
impl ScriptedRng {
    pub(crate) fn new(words: &[u64]) -> Self {
        assert!(!words.is_empty(), "scripted rng needs at least one word");
        Self { words: words.to_vec(), cursor: 0 }
    }

    pub(crate) fn zeros() -> Self {
        Self::new(&[0])
    }
}

#[cfg(test)]
impl WalkRng for ScriptedRng {
    fn next_raw(&mut self) -> u64 {
        let word = self.words[self.cursor % self.words.len()];
        self.cursor += 1;
        word
    }
}
