use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const DEFAULT_PROBABILITY: f64 = 0.5;

/// Geometric tower-height generator.
///
/// A new node gets level `n + 1` with probability `p^n`, truncated at
/// `max_level`. The random source is owned so a seeded or scripted rng can
/// fix the sequence of heights.
#[derive(Debug, Clone)]
pub struct LevelGenerator<R: Rng = ChaCha8Rng> {
    rng: R,
    max_level: usize,
    probability: f64,
}

impl LevelGenerator<ChaCha8Rng> {
    pub fn seeded(max_level: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::new(max_level, rng)
    }
}

impl<R: Rng> LevelGenerator<R> {
    pub fn new(max_level: usize, rng: R) -> Self {
        Self {
            rng,
            max_level,
            probability: DEFAULT_PROBABILITY,
        }
    }

    pub fn max_level(&self) -> usize {
        self.max_level
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub(crate) fn set_probability(&mut self, probability: f64) {
        self.probability = probability;
    }

    /// Draw a level in `[1, max_level]`.
    pub fn random_level(&mut self) -> usize {
        let mut level = 1;
        while level < self.max_level && self.rng.gen::<f64>() < self.probability {
            level += 1;
        }
        level
    }
}
