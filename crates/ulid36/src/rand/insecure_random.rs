use crate::RandSource;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use std::{
    sync::{Mutex, PoisonError},
    time::{SystemTime, UNIX_EPOCH},
};

/// A fast, **non-cryptographic** `RandSource`, seeded from the wall clock.
///
/// Only handed out by [`detect_prng`](crate::detect_prng) when no secure
/// source is usable and the caller explicitly allowed the fallback.
/// Identifiers drawn from it are predictable.
///
/// The generator state sits behind a mutex so the source can be shared
/// between threads.
#[derive(Debug)]
pub struct InsecureRandom {
    rng: Mutex<SmallRng>,
}

impl InsecureRandom {
    /// Creates a generator from an explicit seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(SmallRng::seed_from_u64(seed)),
        }
    }
}

impl Default for InsecureRandom {
    /// Seeds from the current wall-clock time in nanoseconds.
    fn default() -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::from_seed(seed)
    }
}

impl RandSource<f64> for InsecureRandom {
    fn rand(&self) -> f64 {
        self.rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .random()
    }
}
