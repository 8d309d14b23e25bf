use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};
use wordsearch_core::DEFAULT_SEED_PHRASE;

/// How the run's random source is seeded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SeedPolicy {
    /// Seed derived from a fixed phrase; every run prints the same puzzle.
    Fixed,
    /// Seed supplied by the caller.
    Explicit(u64),
    /// Seed taken from the system clock.
    Clock,
}

impl SeedPolicy {
    /// Builds the random source shared by placement and background fill.
    pub(crate) fn rng(self) -> ChaCha8Rng {
        match self {
            Self::Fixed => ChaCha8Rng::from_seed(phrase_seed(DEFAULT_SEED_PHRASE)),
            Self::Explicit(seed) => ChaCha8Rng::seed_from_u64(seed),
            Self::Clock => ChaCha8Rng::seed_from_u64(clock_seed()),
        }
    }
}

fn phrase_seed(phrase: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(phrase.as_bytes());
    let digest = hasher.finalize();
    let mut seed = [0_u8; 32];
    seed.copy_from_slice(&digest);
    seed
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
