#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    DetectedRandom, ID_LEN, RandSource, Result, SystemClock, TIME_LEN, TimeSource, Ulid36,
    Ulid36Generator,
    base36::{encode_random_into, encode_time_into},
    detect_prng,
};

/// A *non-monotonic* identifier generator.
///
/// Every call encodes the time and draws a fresh 16-symbol random suffix. It
/// keeps no state between calls, so it is as thread-safe as its time and
/// random sources.
///
/// ## Features
/// - ✅ Stateless
/// - ✅ Probabilistically unique (no coordination required)
/// - ❌ Not monotonic within a millisecond (the suffix is random)
///
/// ## See Also
/// - [`BasicMonoUlid36Generator`]
/// - [`LockMonoUlid36Generator`]
///
/// [`BasicMonoUlid36Generator`]: crate::BasicMonoUlid36Generator
/// [`LockMonoUlid36Generator`]: crate::LockMonoUlid36Generator
#[derive(Clone, Debug)]
pub struct BasicUlid36Generator<T, R>
where
    T: TimeSource<u64>,
    R: RandSource<f64>,
{
    time: T,
    rng: R,
}

impl<T, R> BasicUlid36Generator<T, R>
where
    T: TimeSource<u64>,
    R: RandSource<f64>,
{
    /// Creates a new [`BasicUlid36Generator`] with the provided time source
    /// and RNG.
    ///
    /// # Parameters
    /// - `time`: A [`TimeSource`] used when no seed time is given
    /// - `rng`: A [`RandSource`] yielding draws in `[0, 1)`
    ///
    /// # Example
    /// ```
    /// use ulid36::{BasicUlid36Generator, SystemClock, ThreadRandom};
    ///
    /// let generator = BasicUlid36Generator::new(SystemClock, ThreadRandom);
    /// let id = generator.generate(None).unwrap();
    /// assert_eq!(id.as_str().len(), 25);
    /// ```
    pub const fn new(time: T, rng: R) -> Self {
        Self { time, rng }
    }

    /// Generates an identifier for `seed_time`, or for the current time when
    /// `seed_time` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTimestamp`](crate::Error::InvalidTimestamp) if
    /// the time exceeds [`TIME_MAX`](crate::TIME_MAX). No random draw is
    /// consumed in that case.
    ///
    /// # Example
    /// ```
    /// use ulid36::{BasicUlid36Generator, SystemClock};
    ///
    /// let generator = BasicUlid36Generator::new(SystemClock, || 0.0);
    /// let id = generator.generate(Some(37)).unwrap();
    /// assert_eq!(id, "1211111110000000000000000");
    /// ```
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate(&self, seed_time: Option<u64>) -> Result<Ulid36> {
        let now = seed_time.unwrap_or_else(|| self.time.current_millis());
        let mut buf = [0_u8; ID_LEN];
        encode_time_into(now, &mut buf[..TIME_LEN])?;
        encode_random_into(&mut buf[TIME_LEN..], &self.rng);
        Ok(Ulid36::from_encoded(buf, now))
    }

    /// Generates an identifier for the current time.
    ///
    /// # Errors
    ///
    /// See [`Self::generate`].
    pub fn next_id(&self) -> Result<Ulid36> {
        self.generate(None)
    }
}

impl<T, R> Ulid36Generator<T, R> for BasicUlid36Generator<T, R>
where
    T: TimeSource<u64>,
    R: RandSource<f64>,
{
    fn new(time: T, rng: R) -> Self {
        Self::new(time, rng)
    }

    fn generate(&self, seed_time: Option<u64>) -> Result<Ulid36> {
        self.generate(seed_time)
    }
}

/// Creates a wall-clock [`BasicUlid36Generator`] with the best secure random
/// source available (see [`detect_prng`]).
///
/// # Errors
///
/// Returns [`Error::NoSecureEntropy`](crate::Error::NoSecureEntropy) if no
/// secure source is usable.
///
/// # Example
/// ```
/// let generator = ulid36::factory().unwrap();
/// let a = generator.next_id().unwrap();
/// let b = generator.next_id().unwrap();
/// assert_ne!(a, b);
/// ```
pub fn factory() -> Result<BasicUlid36Generator<SystemClock, DetectedRandom>> {
    Ok(BasicUlid36Generator::new(SystemClock, detect_prng(false)?))
}
