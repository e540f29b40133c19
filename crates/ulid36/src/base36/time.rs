//! Timestamp <-> digit-string codec.
//!
//! Digits are produced least-significant first and written in production
//! order, so the string reads as the timestamp's base-36 numeral reversed.
//! The first digit is written as-is and doubles as a rotation key: every
//! later digit is written as `(digit + key) mod 36`. Decoding reads the key
//! from the first symbol and undoes the rotation.
//!
//! Both directions derive the key through the same [`ShiftKey`] state, so the
//! pair stays symmetric by construction.

use super::alphabet::{BASE, checked_index, symbol_at};
use crate::{Error, ID_LEN, MalformedError, Result, TIME_LEN, TIME_MAX, TimestampError};

/// Rotates a raw digit by the key.
#[inline]
#[must_use]
pub const fn shift_digit(digit: u8, key: u8) -> u8 {
    (digit + key) % BASE
}

/// Inverse of [`shift_digit`].
#[inline]
#[must_use]
pub const fn unshift_digit(symbol: u8, key: u8) -> u8 {
    (symbol + BASE - key) % BASE
}

/// Key derivation shared by encoder and decoder: the first value seen passes
/// through untouched and becomes the key for all later positions.
#[derive(Clone, Copy, Debug, Default)]
struct ShiftKey(Option<u8>);

impl ShiftKey {
    #[inline]
    fn encode(&mut self, digit: u8) -> u8 {
        match self.0 {
            Some(key) => shift_digit(digit, key),
            None => {
                self.0 = Some(digit);
                digit
            }
        }
    }

    #[inline]
    fn decode(&mut self, symbol: u8) -> u8 {
        match self.0 {
            Some(key) => unshift_digit(symbol, key),
            None => {
                self.0 = Some(symbol);
                symbol
            }
        }
    }
}

/// Validates a floating-point timestamp and converts it to whole
/// milliseconds.
///
/// Checks run in this order: `NaN`, greater than [`TIME_MAX`], negative, not
/// an integer.
///
/// # Errors
///
/// Returns [`Error::InvalidTimestamp`] naming the first failed check.
///
/// # Example
/// ```
/// use ulid36::{Error, TimestampError, validate_timestamp};
///
/// assert_eq!(validate_timestamp(1_700_000_000_000.0), Ok(1_700_000_000_000));
/// assert_eq!(
///     validate_timestamp(-1.0),
///     Err(Error::InvalidTimestamp(TimestampError::Negative))
/// );
/// ```
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn validate_timestamp(timestamp: f64) -> Result<u64> {
    if timestamp.is_nan() {
        return Err(TimestampError::NotANumber.into());
    }
    if timestamp > TIME_MAX as f64 {
        return Err(TimestampError::ExceedsMax {
            value: timestamp as u64,
        }
        .into());
    }
    if timestamp < 0.0 {
        return Err(TimestampError::Negative.into());
    }
    if timestamp.fract() != 0.0 {
        return Err(TimestampError::NotAnInteger.into());
    }
    Ok(timestamp as u64)
}

#[inline]
fn check_timestamp(timestamp: u64) -> Result<()> {
    if timestamp > TIME_MAX {
        return Err(TimestampError::ExceedsMax { value: timestamp }.into());
    }
    Ok(())
}

/// Encodes `timestamp` into `buf`, filling every byte of it.
///
/// The length of `buf` is the number of digits produced. Digits beyond that
/// length (the most significant part of the timestamp) are discarded.
///
/// # Errors
///
/// Returns [`TimestampError::ExceedsMax`] if `timestamp > TIME_MAX`.
pub fn encode_time_into(timestamp: u64, buf: &mut [u8]) -> Result<()> {
    check_timestamp(timestamp)?;
    let base = u64::from(BASE);
    let mut rest = timestamp;
    let mut key = ShiftKey::default();
    for slot in buf.iter_mut() {
        #[allow(clippy::cast_possible_truncation)]
        let digit = (rest % base) as u8;
        *slot = symbol_at(key.encode(digit));
        rest /= base;
    }
    Ok(())
}

/// Encodes `timestamp` as a `len`-symbol string.
///
/// # Errors
///
/// Returns [`Error::InvalidTimestamp`] if `timestamp > TIME_MAX`.
///
/// # Example
/// ```
/// use ulid36::encode_time;
///
/// assert_eq!(encode_time(0, 9).unwrap(), "000000000");
/// assert_eq!(encode_time(37, 9).unwrap(), "121111111");
/// ```
pub fn encode_time(timestamp: u64, len: usize) -> Result<String> {
    let mut buf = vec![0_u8; len];
    encode_time_into(timestamp, &mut buf)?;
    // SAFETY: `buf` holds only symbols from the ASCII alphabet.
    Ok(unsafe { String::from_utf8_unchecked(buf) })
}

/// Decodes a time prefix of any length back to its timestamp.
///
/// # Errors
///
/// - [`Error::InvalidCharacter`] for a byte outside the alphabet
/// - [`MalformedError::TimestampOverflow`] if the value exceeds [`TIME_MAX`]
pub fn decode_time_digits(digits: &[u8]) -> Result<u64> {
    let base = u64::from(BASE);
    let mut key = ShiftKey::default();
    let mut time = 0_u64;
    let mut weight = Some(1_u64);
    for (i, &b) in digits.iter().enumerate() {
        let digit = u64::from(key.decode(checked_index(b, i)?));
        if digit != 0 {
            time = weight
                .and_then(|w| w.checked_mul(digit))
                .and_then(|c| time.checked_add(c))
                .ok_or(MalformedError::TimestampOverflow { value: u64::MAX })?;
        }
        weight = weight.and_then(|w| w.checked_mul(base));
    }
    if time > TIME_MAX {
        return Err(MalformedError::TimestampOverflow { value: time }.into());
    }
    Ok(time)
}

/// Decodes the timestamp of a full identifier string.
///
/// Only the first [`TIME_LEN`] symbols are read, but the whole input must be
/// exactly [`ID_LEN`] bytes long. Upper-case input is accepted.
///
/// # Errors
///
/// - [`MalformedError::InvalidLength`] if `id` is not [`ID_LEN`] bytes
/// - [`Error::InvalidCharacter`] for a time symbol outside the alphabet
/// - [`MalformedError::TimestampOverflow`] if the decoded value exceeds
///   [`TIME_MAX`]
///
/// # Example
/// ```
/// use ulid36::{Error, MalformedError, decode_time};
///
/// assert_eq!(decode_time("121111111zzzzzzzzzzzzzzzz").unwrap(), 37);
/// assert_eq!(
///     decode_time("121111111"),
///     Err(Error::MalformedIdentifier(MalformedError::InvalidLength { len: 9 }))
/// );
/// ```
pub fn decode_time(id: &str) -> Result<u64> {
    let bytes = id.as_bytes();
    if bytes.len() != ID_LEN {
        return Err(Error::MalformedIdentifier(MalformedError::InvalidLength {
            len: bytes.len(),
        }));
    }
    decode_time_digits(&bytes[..TIME_LEN])
}
