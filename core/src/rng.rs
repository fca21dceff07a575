//! Deterministic random number generation.
//!
//! RULE: Nothing in the game core may call any platform RNG.
//! Every draw flows through the RandomSource handed to the engine,
//! so a test can substitute a scripted source and force the exact
//! branch it wants to assert.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use std::collections::VecDeque;

/// The single randomness seam of the core: a uniform draw in [0.0, 1.0).
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// Bernoulli trial: true with probability p.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// A percentage roll in [0.0, 100.0).
    fn percent_roll(&mut self) -> f64 {
        self.next_f64() * 100.0
    }

    /// Uniform index in [0, n). n must be > 0.
    fn pick_index(&mut self, n: usize) -> usize {
        assert!(n > 0, "pick_index needs n > 0");
        let idx = (self.next_f64() * n as f64) as usize;
        idx.min(n - 1)
    }
}

/// Seeded production source backed by Pcg64Mcg.
pub struct GameRng {
    inner: Pcg64Mcg,
}

impl GameRng {
    pub fn seed_from(seed: u64) -> Self {
        Self {
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }
}

impl RandomSource for GameRng {
    fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

/// Scripted source for tests and tooling: returns the queued values in
/// order, then falls back to a fixed value once exhausted.
pub struct SequenceRng {
    values: VecDeque<f64>,
    fallback: f64,
}

impl SequenceRng {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().collect(),
            // High enough to miss every percentage threshold in the game.
            fallback: 0.99,
        }
    }

    pub fn with_fallback(mut self, fallback: f64) -> Self {
        self.fallback = fallback;
        self
    }
}

impl RandomSource for SequenceRng {
    fn next_f64(&mut self) -> f64 {
        self.values.pop_front().unwrap_or(self.fallback)
    }
}
