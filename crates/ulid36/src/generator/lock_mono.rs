use std::sync::Arc;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    DetectedRandom, MonoState, RANDOM_LEN, RandSource, Result, SystemClock, TimeSource, Ulid36,
    Ulid36Generator, detect_prng, generator::Mutex,
};

/// A lock-based *monotonic* identifier generator suitable for multi-threaded
/// environments.
///
/// This generator wraps its state in an [`Arc<Mutex<_>>`], allowing safe
/// shared use across threads. Clones share the same state.
///
/// ## Features
/// - ✅ Thread-safe
/// - ✅ Probabilistically unique (no coordination required)
/// - ✅ Strictly increasing within a time unit
///
/// ## Recommended When
/// - You're in a multi-threaded environment
/// - You need identifiers created within the same millisecond to sort in
///   creation order
///
/// ## See Also
/// - [`BasicUlid36Generator`]
/// - [`BasicMonoUlid36Generator`]
///
/// [`BasicUlid36Generator`]: crate::BasicUlid36Generator
/// [`BasicMonoUlid36Generator`]: crate::BasicMonoUlid36Generator
pub struct LockMonoUlid36Generator<T, R>
where
    T: TimeSource<u64>,
    R: RandSource<f64>,
{
    state: Arc<Mutex<MonoState>>,
    time: T,
    rng: R,
}

impl<T, R> Clone for LockMonoUlid36Generator<T, R>
where
    T: TimeSource<u64> + Clone,
    R: RandSource<f64> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            time: self.time.clone(),
            rng: self.rng.clone(),
        }
    }
}

impl<T, R> LockMonoUlid36Generator<T, R>
where
    T: TimeSource<u64>,
    R: RandSource<f64>,
{
    /// Creates a new [`LockMonoUlid36Generator`] with an empty state.
    ///
    /// # Example
    /// ```
    /// use ulid36::{LockMonoUlid36Generator, SystemClock, ThreadRandom};
    /// use std::thread;
    ///
    /// let generator = LockMonoUlid36Generator::new(SystemClock, ThreadRandom);
    /// let handles: Vec<_> = (0..4)
    ///     .map(|_| {
    ///         let g = generator.clone();
    ///         thread::spawn(move || g.next_id().unwrap())
    ///     })
    ///     .collect();
    /// for h in handles {
    ///     assert_eq!(h.join().unwrap().as_str().len(), 25);
    /// }
    /// ```
    pub fn new(time: T, rng: R) -> Self {
        Self {
            state: Arc::new(Mutex::new(MonoState::default())),
            time,
            rng,
        }
    }

    /// Creates a generator that continues from a previously emitted
    /// identifier's timestamp and random suffix.
    ///
    /// # Errors
    ///
    /// Fails if `last_time` exceeds [`TIME_MAX`](crate::TIME_MAX) or
    /// `last_random` holds a symbol outside the alphabet.
    pub fn from_components(
        last_time: u64,
        last_random: &[u8; RANDOM_LEN],
        time: T,
        rng: R,
    ) -> Result<Self> {
        let last = Ulid36::from_parts(last_time, last_random)?;
        let state = MonoState::resume(last_time, last.random_bytes());
        Ok(Self {
            state: Arc::new(Mutex::new(state)),
            time,
            rng,
        })
    }

    /// Returns a snapshot of the current state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LockPoisoned`](crate::Error) if another thread
    /// panicked while holding the lock.
    pub fn state(&self) -> Result<MonoState> {
        #[cfg(feature = "parking-lot")]
        let state = self.state.lock();
        #[cfg(not(feature = "parking-lot"))]
        let state = self.state.lock()?;
        Ok(*state)
    }

    /// Generates the next identifier for `seed_time`, or for the current time
    /// when `seed_time` is `None`.
    ///
    /// The time source is read before the lock is taken. The state is left
    /// unchanged on error.
    ///
    /// # Errors
    ///
    /// - [`Error::IncrementOverflow`](crate::Error::IncrementOverflow) if the
    ///   previous suffix was already all `z`
    /// - [`Error::InvalidTimestamp`](crate::Error::InvalidTimestamp) if the
    ///   time exceeds [`TIME_MAX`](crate::TIME_MAX)
    /// - [`Error::LockPoisoned`](crate::Error) if another thread panicked
    ///   while holding the lock
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate(&self, seed_time: Option<u64>) -> Result<Ulid36> {
        let now = seed_time.unwrap_or_else(|| self.time.current_millis());

        #[cfg(feature = "parking-lot")]
        let mut state = self.state.lock();
        #[cfg(not(feature = "parking-lot"))]
        let mut state = self.state.lock()?;

        let (next, id) = state.step(now, &self.rng)?;
        *state = next;
        Ok(id)
    }

    /// Generates the next identifier for the current time.
    ///
    /// # Errors
    ///
    /// See [`Self::generate`].
    pub fn next_id(&self) -> Result<Ulid36> {
        self.generate(None)
    }
}

impl<T, R> Ulid36Generator<T, R> for LockMonoUlid36Generator<T, R>
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

/// Creates a wall-clock monotonic generator with the best secure random
/// source available (see [`detect_prng`]).
///
/// The generator is lock-based, so it can be cloned and shared between
/// threads as long as the detected source allows it.
///
/// # Errors
///
/// Returns [`Error::NoSecureEntropy`](crate::Error::NoSecureEntropy) if no
/// secure source is usable.
///
/// # Example
/// ```
/// let generator = ulid36::monotonic_factory().unwrap();
/// let a = generator.generate(Some(1_700_000_000_000)).unwrap();
/// let b = generator.generate(Some(1_700_000_000_000)).unwrap();
/// assert_eq!(a.time_part(), b.time_part());
/// assert!(a < b);
/// ```
pub fn monotonic_factory() -> Result<LockMonoUlid36Generator<SystemClock, DetectedRandom>> {
    Ok(LockMonoUlid36Generator::new(
        SystemClock,
        detect_prng(false)?,
    ))
}
