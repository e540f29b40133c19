/// A result type defaulting to the crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All error variants that `ulid36` can emit.
///
/// Every variant is a validation or logic failure surfaced immediately to the
/// caller. Nothing here is transient, and the crate never retries on its own.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The timestamp cannot be encoded.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(#[from] TimestampError),

    /// The identifier has the wrong length, or its time prefix decodes to a
    /// value beyond [`TIME_MAX`](crate::TIME_MAX).
    #[error("malformed identifier: {0}")]
    MalformedIdentifier(#[from] MalformedError),

    /// A byte outside the base-36 alphabet was found while decoding or
    /// incrementing.
    #[error("invalid character '{}' (byte {byte:#04x}) at index {index}", escaped(.byte))]
    InvalidCharacter {
        /// The offending byte.
        byte: u8,
        /// Byte offset of the offending symbol.
        index: usize,
    },

    /// Every symbol of the random suffix is already `z`; the identifier space
    /// for this time unit is exhausted.
    #[error("cannot increment: every symbol is already at the maximum")]
    IncrementOverflow,

    /// No cryptographically secure entropy source is usable and the insecure
    /// fallback was not allowed.
    #[error("secure entropy source unavailable and insecure fallback not allowed")]
    NoSecureEntropy,

    /// The operation failed because the generator's lock was **poisoned**.
    ///
    /// This occurs when a thread panics while holding the lock. When the
    /// `parking-lot` feature is enabled, mutexes do **not** poison, so this
    /// variant is not available.
    #[cfg_attr(docsrs, doc(cfg(not(feature = "parking-lot"))))]
    #[cfg(not(feature = "parking-lot"))]
    #[error("generator lock poisoned")]
    LockPoisoned,
}

/// Why a timestamp was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum TimestampError {
    #[error("timestamp must be a number")]
    NotANumber,
    #[error("cannot encode time greater than {max}", max = crate::TIME_MAX)]
    ExceedsMax {
        /// The rejected value, saturated to `u64`.
        value: u64,
    },
    #[error("time must be positive")]
    Negative,
    #[error("time must be an integer")]
    NotAnInteger,
}

/// Why an identifier string was rejected as a whole.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum MalformedError {
    #[error("expected {expected} characters, got {len}", expected = crate::ID_LEN)]
    InvalidLength { len: usize },
    #[error("decoded timestamp {value} is greater than {max}", max = crate::TIME_MAX)]
    TimestampOverflow { value: u64 },
}

fn escaped(byte: &u8) -> core::ascii::EscapeDefault {
    core::ascii::escape_default(*byte)
}

#[cfg(not(feature = "parking-lot"))]
use crate::generator::{MutexGuard, PoisonError};
#[cfg(not(feature = "parking-lot"))]
impl<T> From<PoisonError<MutexGuard<'_, T>>> for Error {
    fn from(_: PoisonError<MutexGuard<'_, T>>) -> Self {
        Self::LockPoisoned
    }
}
