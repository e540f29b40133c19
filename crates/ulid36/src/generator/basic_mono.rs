use crate::{MonoState, RANDOM_LEN, RandSource, Result, TimeSource, Ulid36, Ulid36Generator};
use core::cell::Cell;
#[cfg(feature = "tracing")]
use tracing::instrument;

/// A *monotonic* identifier generator suitable for single-threaded
/// environments.
///
/// This generator is lightweight and fast, but is not thread-safe.
///
/// ## Features
/// - ❌ Not thread-safe
/// - ✅ Probabilistically unique (no coordination required)
/// - ✅ Strictly increasing within a time unit (the previous random suffix
///   is incremented instead of redrawn)
///
/// ## Recommended When
/// - You're in a single-threaded environment (no shared access)
/// - You need identifiers created within the same millisecond to sort in
///   creation order
///
/// ## See Also
/// - [`BasicUlid36Generator`]
/// - [`LockMonoUlid36Generator`]
///
/// [`BasicUlid36Generator`]: crate::BasicUlid36Generator
/// [`LockMonoUlid36Generator`]: crate::LockMonoUlid36Generator
pub struct BasicMonoUlid36Generator<T, R>
where
    T: TimeSource<u64>,
    R: RandSource<f64>,
{
    state: Cell<MonoState>,
    time: T,
    rng: R,
}

impl<T, R> BasicMonoUlid36Generator<T, R>
where
    T: TimeSource<u64>,
    R: RandSource<f64>,
{
    /// Creates a new [`BasicMonoUlid36Generator`] with an empty state.
    ///
    /// The first identifier always gets a fresh random suffix, whatever time
    /// it is generated for.
    ///
    /// # Example
    /// ```
    /// use ulid36::{BasicMonoUlid36Generator, SystemClock, ThreadRandom};
    ///
    /// let generator = BasicMonoUlid36Generator::new(SystemClock, ThreadRandom);
    /// let a = generator.generate(Some(1_000)).unwrap();
    /// let b = generator.generate(Some(1_000)).unwrap();
    /// assert!(a < b);
    /// ```
    pub fn new(time: T, rng: R) -> Self {
        Self {
            state: Cell::new(MonoState::default()),
            time,
            rng,
        }
    }

    /// Creates a generator that continues from a previously emitted
    /// identifier's timestamp and random suffix.
    ///
    /// This constructor is primarily useful for restoring state from
    /// persistent storage.
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
        Ok(Self {
            state: Cell::new(MonoState::resume(last_time, last.random_bytes())),
            time,
            rng,
        })
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> MonoState {
        self.state.get()
    }

    /// Generates the next identifier for `seed_time`, or for the current time
    /// when `seed_time` is `None`.
    ///
    /// A time at or before the previous identifier's time reuses that time
    /// and increments the previous suffix; a later time draws a fresh one.
    ///
    /// # Errors
    ///
    /// - [`Error::IncrementOverflow`](crate::Error::IncrementOverflow) if the
    ///   previous suffix was already all `z`
    /// - [`Error::InvalidTimestamp`](crate::Error::InvalidTimestamp) if the
    ///   time exceeds [`TIME_MAX`](crate::TIME_MAX)
    ///
    /// The state is left unchanged on error.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate(&self, seed_time: Option<u64>) -> Result<Ulid36> {
        let now = seed_time.unwrap_or_else(|| self.time.current_millis());
        let (next, id) = self.state.get().step(now, &self.rng)?;
        self.state.set(next);
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

impl<T, R> Ulid36Generator<T, R> for BasicMonoUlid36Generator<T, R>
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
