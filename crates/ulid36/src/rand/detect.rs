use crate::{Error, InsecureRandom, OsRandom, RandSource, Result, ThreadRandom};
use rand::{SeedableRng, rngs::StdRng};

/// Answers which entropy sources are usable right now.
///
/// [`detect_prng`] asks the real system through [`SystemEntropy`]; tests and
/// unusual platforms can supply their own answers through
/// [`detect_prng_with`].
pub trait EntropyProbe {
    /// Whether the in-process cryptographic RNG (rand's thread-local ChaCha
    /// generator) can be seeded.
    fn thread_rng_available(&self) -> bool;

    /// Whether the operating system's random-byte source answers.
    fn os_rng_available(&self) -> bool;
}

/// Probes the running system.
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemEntropy;

impl EntropyProbe for SystemEntropy {
    fn thread_rng_available(&self) -> bool {
        StdRng::try_from_os_rng().is_ok()
    }

    fn os_rng_available(&self) -> bool {
        OsRandom::is_available()
    }
}

/// The source chosen by [`detect_prng`].
#[derive(Debug)]
#[non_exhaustive]
pub enum DetectedRandom {
    /// Thread-local cryptographic RNG.
    Thread(ThreadRandom),
    /// Operating-system random bytes, read on every draw.
    Os(OsRandom),
    /// Non-cryptographic fallback. Only produced when explicitly allowed.
    Insecure(InsecureRandom),
}

impl DetectedRandom {
    /// Returns `false` only for the insecure fallback.
    #[must_use]
    pub const fn is_secure(&self) -> bool {
        !matches!(self, Self::Insecure(_))
    }
}

impl RandSource<f64> for DetectedRandom {
    fn rand(&self) -> f64 {
        match self {
            Self::Thread(r) => r.rand(),
            Self::Os(r) => r.rand(),
            Self::Insecure(r) => r.rand(),
        }
    }
}

/// Picks the best available random source for identifier generation.
///
/// Preference order:
/// 1. the thread-local cryptographic RNG
/// 2. the operating system's random bytes
/// 3. a wall-clock-seeded [`InsecureRandom`], only if `allow_insecure` is
///    set; a warning is logged when this happens
///
/// This only queries availability; it does not keep or manage the source.
///
/// # Errors
///
/// Returns [`Error::NoSecureEntropy`] if neither secure source is usable and
/// `allow_insecure` is `false`.
///
/// # Example
/// ```
/// use ulid36::{RandSource, detect_prng};
///
/// let rng = detect_prng(false).unwrap();
/// assert!(rng.is_secure());
/// assert!((0.0..1.0).contains(&rng.rand()));
/// ```
pub fn detect_prng(allow_insecure: bool) -> Result<DetectedRandom> {
    detect_prng_with(&SystemEntropy, allow_insecure)
}

/// Like [`detect_prng`], but asks `probe` which sources are usable.
///
/// # Errors
///
/// Returns [`Error::NoSecureEntropy`] if `probe` reports no secure source and
/// `allow_insecure` is `false`.
pub fn detect_prng_with<P>(probe: &P, allow_insecure: bool) -> Result<DetectedRandom>
where
    P: EntropyProbe + ?Sized,
{
    if probe.thread_rng_available() {
        return Ok(DetectedRandom::Thread(ThreadRandom));
    }
    if probe.os_rng_available() {
        tracing::debug!("thread-local RNG unavailable, reading OS random bytes directly");
        return Ok(DetectedRandom::Os(OsRandom));
    }
    if allow_insecure {
        tracing::warn!("secure entropy unusable, falling back to an insecure PRNG");
        return Ok(DetectedRandom::Insecure(InsecureRandom::default()));
    }
    Err(Error::NoSecureEntropy)
}
