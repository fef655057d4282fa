//! Deterministic seeded randomness for terrain generation.
//!
//! A [`Seed`] is resolved to a `u64` exactly once at the start of a
//! generation. Every random draw in that generation then comes from a single
//! [`NoiseSource`] built from the resolved value, so a fixed seed always
//! reproduces the same grid.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Where the generation seed comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seed {
    /// Derive a fresh seed from the wall clock for every generation.
    #[default]
    Random,
    /// Use this exact value.
    Fixed(u64),
    /// Hash a text seed into a value.
    Text(String),
}

impl Seed {
    /// Resolve to a concrete seed value.
    ///
    /// [`Seed::Random`] reads the system clock, so two calls generally differ.
    pub fn resolve(&self) -> u64 {
        match self {
            Seed::Random => clock_seed(),
            Seed::Fixed(value) => *value,
            Seed::Text(text) => hash_text_seed(text),
        }
    }

    /// Returns `true` if resolving this seed is reproducible.
    pub fn is_deterministic(&self) -> bool {
        !matches!(self, Seed::Random)
    }
}

/// Hash a text seed into a `u64` (SipHash via std's `DefaultHasher`).
pub fn hash_text_seed(text: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    hasher.finish()
}

fn clock_seed() -> u64 {
    // A clock before the epoch still yields a usable seed.
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_nanos() as u64,
        Err(err) => err.duration().as_nanos() as u64,
    }
}

/// Derive the permutation seed for the hill noise field from the generation
/// seed, decorrelated from the integer stream used for carving.
pub fn hill_noise_seed(seed: u64) -> u32 {
    let mixed = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    (mixed ^ (mixed >> 32)) as u32
}

/// Deterministic uniform integer source.
///
/// Identical seeds and identical call sequences produce identical outputs on
/// every platform.
#[derive(Clone, Debug)]
pub struct NoiseSource {
    rng: ChaCha8Rng,
}

impl NoiseSource {
    /// Create a source keyed by `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draw a uniform integer in `[low, high_exclusive)`.
    ///
    /// An empty range yields `low` and consumes no randomness.
    pub fn next_int(&mut self, low: i64, high_exclusive: i64) -> i64 {
        if high_exclusive <= low {
            return low;
        }
        self.rng.random_range(low..high_exclusive)
    }
}
