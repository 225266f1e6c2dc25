//! Randomness for the tile layout.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A fixed seed reproduces the same infographic; without one the stream is
/// seeded from OS entropy.
pub fn infographic_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}
