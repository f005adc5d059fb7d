//! Explicitly owned random number generation for board seeding.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces an identical board
//! - **Owned**: No global random state; callers pass the RNG in
//! - **Reproducible**: The seed is retained so a random board can be rebuilt
//!
//! ```
//! use rust_life::core::LifeRng;
//!
//! let mut a = LifeRng::new(42);
//! let mut b = LifeRng::new(a.seed());
//! assert_eq!(a.gen_bool(), b.gen_bool());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG used by the random board initializer.
///
/// Uses ChaCha8 for speed; the stream for a given seed is stable across
/// platforms.
#[derive(Clone, Debug)]
pub struct LifeRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl LifeRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG with a fresh seed from the operating system.
    ///
    /// Every call yields a different seed, so repeated random boards differ.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw from `0..upper`.
    pub fn gen_range_usize(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..upper)
    }

    /// Uniform two-way choice.
    pub fn gen_bool(&mut self) -> bool {
        self.gen_range_usize(2) == 1
    }
}
