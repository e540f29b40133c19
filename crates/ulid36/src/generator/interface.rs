use crate::{RandSource, Result, TimeSource, Ulid36};

/// A minimal interface for generating [`Ulid36`] identifiers.
pub trait Ulid36Generator<T, R>
where
    T: TimeSource<u64>,
    R: RandSource<f64>,
{
    /// Creates a new generator.
    fn new(time: T, rng: R) -> Self;

    /// Generates an identifier for `seed_time`, or for the time source's
    /// current time when `seed_time` is `None`.
    ///
    /// # Errors
    /// - [`Error::InvalidTimestamp`](crate::Error::InvalidTimestamp) if the
    ///   resolved time exceeds [`TIME_MAX`](crate::TIME_MAX)
    /// - [`Error::IncrementOverflow`](crate::Error::IncrementOverflow) if a
    ///   monotonic generator exhausted the current time unit
    /// - [`Error::LockPoisoned`](crate::Error) for a poisoned lock-based
    ///   generator
    fn generate(&self, seed_time: Option<u64>) -> Result<Ulid36>;

    /// Generates an identifier for the current time.
    ///
    /// # Errors
    /// See [`Self::generate`].
    fn next_id(&self) -> Result<Ulid36> {
        self.generate(None)
    }
}
