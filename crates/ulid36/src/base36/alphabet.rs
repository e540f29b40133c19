use crate::{Error, Result};

/// The 36 symbols, in numeric order. These must never change: every
/// previously minted identifier depends on this exact mapping.
pub const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Number of symbols (the numeral base).
pub const BASE: u8 = 36;

/// Index of the largest symbol, `z`.
pub const MAX_INDEX: u8 = BASE - 1;

const NO_VALUE: u8 = 255;

/// Lookup table for base-36 decoding.
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0_u8;
    // Main alphabet, allow upper-case
    while i < BASE {
        let c = ALPHABET[i as usize];
        lut[c as usize] = i;
        if c.is_ascii_lowercase() {
            lut[(c - 32) as usize] = i;
        }
        i += 1;
    }
    lut
};

/// Returns the symbol for a digit value.
///
/// # Panics
///
/// Panics if `index >= 36`. Every caller in this crate reduces modulo
/// [`BASE`] first.
#[inline]
#[must_use]
pub const fn symbol_at(index: u8) -> u8 {
    ALPHABET[index as usize]
}

/// Returns the digit value of `byte`, or `None` when it is not part of the
/// alphabet. Upper-case letters map to the same value as their lower-case
/// form.
#[inline]
#[must_use]
pub const fn index_of(byte: u8) -> Option<u8> {
    match LOOKUP[byte as usize] {
        NO_VALUE => None,
        v => Some(v),
    }
}

/// Like [`index_of`], but reports the failure as
/// [`Error::InvalidCharacter`] at position `index`.
#[inline]
pub(crate) fn checked_index(byte: u8, index: usize) -> Result<u8> {
    index_of(byte).ok_or(Error::InvalidCharacter { byte, index })
}
