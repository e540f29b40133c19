use crate::{
    Error, MalformedError, Result,
    base36::{checked_index, decode_time_digits, encode_time_into},
};
use core::{cmp::Ordering, fmt, hash::Hash, str::FromStr};

/// Number of symbols holding the (shift-ciphered) timestamp.
pub const TIME_LEN: usize = 9;

/// Number of symbols holding the random, incrementable payload.
pub const RANDOM_LEN: usize = 16;

/// Total identifier length.
pub const ID_LEN: usize = TIME_LEN + RANDOM_LEN;

/// Largest encodable timestamp, `2^48 - 1` milliseconds.
pub const TIME_MAX: u64 = (1 << 48) - 1;

/// Number of distinct values the time prefix can hold, `36^TIME_LEN`.
///
/// Timestamps at or above it keep only their low nine digits, so the prefix
/// decodes to `timestamp % TIME_SPAN`.
pub const TIME_SPAN: u64 = 36_u64.pow(TIME_LEN as u32);

/// A 25-symbol identifier: a 9-symbol shift-ciphered timestamp followed by a
/// 16-symbol random suffix, all from `0-9a-z`.
///
/// Values are always canonical (lower-case) and carry the timestamp their
/// prefix decodes to, so [`Ulid36::timestamp`] is infallible and agrees with
/// [`decode_time`](crate::decode_time) on the text. Ordering, equality and
/// hashing look only at the text, and ordering matches the alphabet's symbol
/// order because ASCII digits sort before ASCII lower-case letters.
///
/// # Example
/// ```
/// use ulid36::Ulid36;
///
/// let id: Ulid36 = "121111111ZZZZZZZZZZZZZZZZ".parse().unwrap();
/// assert_eq!(id.timestamp(), 37);
/// assert_eq!(id, "121111111zzzzzzzzzzzzzzzz");
/// ```
#[derive(Copy, Clone)]
pub struct Ulid36 {
    buf: [u8; ID_LEN],
    timestamp: u64,
}

impl Ulid36 {
    /// Wraps a buffer the encoders just filled from `timestamp`.
    pub(crate) const fn from_encoded(buf: [u8; ID_LEN], timestamp: u64) -> Self {
        Self {
            buf,
            timestamp: timestamp % TIME_SPAN,
        }
    }

    /// Builds an identifier from a timestamp and an already-canonical random
    /// suffix.
    pub(crate) fn from_canonical_parts(timestamp: u64, random: &[u8; RANDOM_LEN]) -> Result<Self> {
        let mut buf = [0_u8; ID_LEN];
        encode_time_into(timestamp, &mut buf[..TIME_LEN])?;
        buf[TIME_LEN..].copy_from_slice(random);
        Ok(Self::from_encoded(buf, timestamp))
    }

    /// Builds an identifier from a timestamp and a random suffix.
    ///
    /// The suffix may use upper-case letters; it is stored lower-case.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidTimestamp`] if `timestamp` exceeds [`TIME_MAX`]
    /// - [`Error::InvalidCharacter`] for a suffix byte outside the alphabet
    ///   (`index` is relative to the whole identifier)
    pub fn from_parts(timestamp: u64, random: &[u8; RANDOM_LEN]) -> Result<Self> {
        let mut canonical = *random;
        for (i, b) in canonical.iter_mut().enumerate() {
            checked_index(*b, TIME_LEN + i)?;
            b.make_ascii_lowercase();
        }
        Self::from_canonical_parts(timestamp, &canonical)
    }

    /// Returns the timestamp the time prefix decodes to, in milliseconds.
    ///
    /// This is the value passed at construction reduced modulo
    /// [`TIME_SPAN`].
    #[must_use]
    pub const fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Returns the full identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // SAFETY: `self.buf` holds only lower-case ASCII alphabet symbols
        unsafe { core::str::from_utf8_unchecked(&self.buf) }
    }

    /// Returns the 9-symbol time prefix.
    #[must_use]
    pub fn time_part(&self) -> &str {
        &self.as_str()[..TIME_LEN]
    }

    /// Returns the 16-symbol random suffix.
    #[must_use]
    pub fn random_part(&self) -> &str {
        &self.as_str()[TIME_LEN..]
    }

    /// Returns a copy of the random suffix bytes.
    #[must_use]
    pub fn random_bytes(&self) -> [u8; RANDOM_LEN] {
        let mut out = [0_u8; RANDOM_LEN];
        out.copy_from_slice(&self.buf[TIME_LEN..]);
        out
    }

    /// Returns the raw identifier bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; ID_LEN] {
        &self.buf
    }
}

impl FromStr for Ulid36 {
    type Err = Error;

    /// Parses and validates an identifier. Upper-case input is accepted and
    /// normalized.
    fn from_str(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != ID_LEN {
            return Err(MalformedError::InvalidLength { len: bytes.len() }.into());
        }
        let mut buf = [0_u8; ID_LEN];
        for (i, (out, &b)) in buf.iter_mut().zip(bytes).enumerate() {
            checked_index(b, i)?;
            *out = b.to_ascii_lowercase();
        }
        let timestamp = decode_time_digits(&buf[..TIME_LEN])?;
        Ok(Self { buf, timestamp })
    }
}

impl TryFrom<&str> for Ulid36 {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl PartialEq for Ulid36 {
    fn eq(&self, other: &Self) -> bool {
        self.buf == other.buf
    }
}

impl Eq for Ulid36 {}

impl PartialOrd for Ulid36 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ulid36 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.buf.cmp(&other.buf)
    }
}

impl Hash for Ulid36 {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.buf.hash(state);
    }
}

impl PartialEq<str> for Ulid36 {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Ulid36 {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl AsRef<str> for Ulid36 {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<Ulid36> for String {
    fn from(id: Ulid36) -> Self {
        id.as_str().to_owned()
    }
}

impl fmt::Display for Ulid36 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Ulid36 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ulid36")
            .field("id", &self.as_str())
            .field("timestamp", &self.timestamp)
            .finish()
    }
}
