//! Thread-local identifier generation utilities.
//!
//! Each OS thread lazily gets its own wall-clock generators backed by
//! [`ThreadRandom`], so these helpers need no locking. Monotonicity is per
//! thread: identifiers from two threads in the same millisecond are unique
//! but not ordered relative to each other.
//!
//! # Example
//! ```rust
//! let a = ulid36::ulid36_mono().unwrap();
//! let b = ulid36::ulid36_mono().unwrap();
//! assert!(a < b || a.timestamp() < b.timestamp());
//! ```

use crate::{
    BasicMonoUlid36Generator, BasicUlid36Generator, Result, SystemClock, ThreadRandom, Ulid36,
};

thread_local! {
    static BASIC: BasicUlid36Generator<SystemClock, ThreadRandom> =
        const { BasicUlid36Generator::new(SystemClock, ThreadRandom) };

    static BASIC_MONO: BasicMonoUlid36Generator<SystemClock, ThreadRandom> =
        BasicMonoUlid36Generator::new(SystemClock, ThreadRandom);
}

/// Generates a non-monotonic identifier for the current time.
///
/// # Errors
///
/// Returns [`Error::InvalidTimestamp`](crate::Error::InvalidTimestamp) if the
/// system clock reads beyond [`TIME_MAX`](crate::TIME_MAX).
///
/// # Example
/// ```rust
/// let id = ulid36::ulid36().unwrap();
/// println!("{id}");
/// ```
pub fn ulid36() -> Result<Ulid36> {
    BASIC.with(BasicUlid36Generator::next_id)
}

/// Generates a monotonic identifier for the current time from this thread's
/// generator.
///
/// # Errors
///
/// - [`Error::IncrementOverflow`](crate::Error::IncrementOverflow) if this
///   thread exhausted the current millisecond's suffix space
/// - [`Error::InvalidTimestamp`](crate::Error::InvalidTimestamp) if the
///   system clock reads beyond [`TIME_MAX`](crate::TIME_MAX)
pub fn ulid36_mono() -> Result<Ulid36> {
    BASIC_MONO.with(BasicMonoUlid36Generator::next_id)
}
