//! Seedable randomness source for the best-first heuristic

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded uniform sampler feeding the best-first node heuristic
///
/// Draws are independent of the board state, so the sampled value acts as
/// a randomized tie-breaker between nodes of equal cost rather than an
/// estimate of remaining work. A fixed seed reproduces the full draw
/// sequence, and with it the solve's node ordering.
pub struct RandomHeuristic {
    rng: StdRng,
}

impl RandomHeuristic {
    /// Create a deterministic sampler from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw the next heuristic value, uniform over [0, 1)
    pub fn sample(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}
