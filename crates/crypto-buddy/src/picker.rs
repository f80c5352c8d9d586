//! Reply Selection
//!
//! Greeting and farewell replies are drawn from small candidate lists. The
//! draw goes through [`ReplyPicker`] so callers can swap real randomness for
//! a fixed choice.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// "Choose one of N" capability (Strategy pattern)
pub trait ReplyPicker {
    /// Index in `0..len`. Only called with `len > 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform random choice backed by a seedable generator
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence of choices
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ReplyPicker for RandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Always the first candidate
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstPicker;

impl ReplyPicker for FirstPicker {
    fn pick(&mut self, _len: usize) -> usize {
        0
    }
}

/// Pick one of `candidates` with `picker`, tolerating out-of-range answers
pub fn choose<'a, P: ReplyPicker + ?Sized>(picker: &mut P, candidates: &[&'a str]) -> &'a str {
    match candidates.len() {
        0 => "",
        len => candidates[picker.pick(len) % len],
    }
}
