//! Configuration for a tarot session.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Configuration for a tarot session.
#[derive(Debug, Clone, Default)]
pub struct TarotConfig {
    /// RNG seed for reproducible readings. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl TarotConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the RNG described by this configuration.
    pub fn rng(&self) -> StdRng {
        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        tracing::debug!(seed, "seeding tarot rng");
        StdRng::seed_from_u64(seed)
    }
}
