use super::alphabet::{BASE, MAX_INDEX, symbol_at};
use crate::RandSource;

/// Maps one draw from `[0, 1)` to a digit.
///
/// A draw of exactly `1.0` would land on 36 and is clamped to 35. Draws
/// outside the contract (negative, `NaN`, huge) saturate into `0..=35` as
/// well, so the result is always a valid symbol index.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn random_digit(draw: f64) -> u8 {
    ((draw * f64::from(BASE)) as u8).min(MAX_INDEX)
}

/// Fills `buf` with random symbols drawn from `rng`.
///
/// Each new digit is prepended, so the first draw ends up in the last
/// position.
pub fn encode_random_into<R>(buf: &mut [u8], rng: &R)
where
    R: RandSource<f64> + ?Sized,
{
    for slot in buf.iter_mut().rev() {
        *slot = symbol_at(random_digit(rng.rand()));
    }
}

/// Returns a `len`-symbol random string drawn from `rng`.
///
/// # Example
/// ```
/// use ulid36::encode_random;
///
/// let halves = || 0.5;
/// assert_eq!(encode_random(4, &halves), "iiii");
/// ```
pub fn encode_random<R>(len: usize, rng: &R) -> String
where
    R: RandSource<f64> + ?Sized,
{
    let mut buf = vec![0_u8; len];
    encode_random_into(&mut buf, rng);
    // SAFETY: `buf` holds only symbols from the ASCII alphabet.
    unsafe { String::from_utf8_unchecked(buf) }
}
