//! Random operand generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A generator seeded from `seed`, or from OS entropy when `None`.
#[must_use]
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// `len` uniformly random digits, least significant first.
///
/// The most significant digit may be zero.
pub fn generate_random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<u8> {
    (0..len).map(|_| rng.random_range(0..10u8)).collect()
}
