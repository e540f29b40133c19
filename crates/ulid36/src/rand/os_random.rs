use crate::RandSource;
use rand::{Rng, TryRngCore, rngs::OsRng};

/// A `RandSource` that reads every draw straight from the operating system's
/// random-byte source (`getrandom`).
///
/// Slower than [`ThreadRandom`](crate::ThreadRandom) but keeps no state in
/// user space.
///
/// # Panics
///
/// [`RandSource::rand`] panics if the operating system refuses to provide
/// random bytes. Use [`detect_prng`](crate::detect_prng) to check
/// availability up front.
#[derive(Default, Clone, Copy, Debug)]
pub struct OsRandom;

impl OsRandom {
    /// Returns `true` if the operating system currently answers random-byte
    /// requests.
    #[must_use]
    pub fn is_available() -> bool {
        OsRng.try_next_u32().is_ok()
    }
}

impl RandSource<f64> for OsRandom {
    fn rand(&self) -> f64 {
        OsRng.unwrap_err().random()
    }
}
