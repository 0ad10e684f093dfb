//! Random source used by the scheduler and the match engine.
//!
//! Nothing in the crate touches a thread-local generator: every operation that
//! needs randomness takes `&mut R where R: Rng + ?Sized`, so a seeded
//! [`SimRng`] replays a whole season exactly.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub type SimRng = ChaCha8Rng;

/// Deterministic generator for replays and tests.
pub fn seeded(seed: u64) -> SimRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Generator seeded from OS entropy.
pub fn from_entropy() -> SimRng {
    ChaCha8Rng::from_entropy()
}

/// Fresh seed from OS entropy. Callers log it and hand it to [`seeded`] so the
/// run can be reproduced later.
pub fn fresh_seed() -> u64 {
    use rand::RngCore;
    from_entropy().next_u64()
}
