use super::alphabet::{MAX_INDEX, checked_index, symbol_at};
use crate::{Error, Result};

/// Adds one to a base-36 numeral in place, carrying from the right.
///
/// Every byte is validated before anything is written, so an invalid
/// character leaves `digits` untouched. On overflow every symbol has been
/// rewritten to `0`; callers that need the old value must work on a copy.
///
/// # Errors
///
/// - [`Error::InvalidCharacter`] for a byte outside the alphabet, reported at
///   the first offending position
/// - [`Error::IncrementOverflow`] if every symbol was already `z`
pub fn increment_in_place(digits: &mut [u8]) -> Result<()> {
    for (i, &b) in digits.iter().enumerate() {
        checked_index(b, i)?;
    }
    for (i, slot) in digits.iter_mut().enumerate().rev() {
        let index = checked_index(*slot, i)?;
        if index == MAX_INDEX {
            *slot = symbol_at(0);
            continue;
        }
        *slot = symbol_at(index + 1);
        return Ok(());
    }
    Err(Error::IncrementOverflow)
}

/// Returns `digits` plus one in the alphabet's numeral system.
///
/// Used by monotonic generation to advance the random suffix instead of
/// drawing a new one.
///
/// # Errors
///
/// - [`Error::InvalidCharacter`] for a symbol outside the alphabet
/// - [`Error::IncrementOverflow`] if every symbol is already `z` (this
///   includes the empty string, which has no room at all)
///
/// # Example
/// ```
/// use ulid36::{Error, increment};
///
/// assert_eq!(increment("0000").unwrap(), "0001");
/// assert_eq!(increment("09zz").unwrap(), "0a00");
/// assert_eq!(increment("zzzz"), Err(Error::IncrementOverflow));
/// ```
pub fn increment(digits: &str) -> Result<String> {
    let mut buf = digits.as_bytes().to_vec();
    increment_in_place(&mut buf)?;
    // SAFETY: on success every byte was validated as an ASCII alphabet symbol
    // and only replaced by another one.
    Ok(unsafe { String::from_utf8_unchecked(buf) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increments_the_last_symbol() {
        assert_eq!(
            increment("0000000000000000").unwrap(),
            "0000000000000001"
        );
        assert_eq!(increment("a").unwrap(), "b");
        assert_eq!(increment("9").unwrap(), "a");
    }

    #[test]
    fn carries_across_max_symbols() {
        assert_eq!(increment("0z").unwrap(), "10");
        assert_eq!(increment("1zzz").unwrap(), "2000");
        assert_eq!(
            increment("0zzzzzzzzzzzzzzz").unwrap(),
            "1000000000000000"
        );
    }

    #[test]
    fn all_max_symbols_overflow() {
        assert_eq!(
            increment("zzzzzzzzzzzzzzzz"),
            Err(Error::IncrementOverflow)
        );
        assert_eq!(increment(""), Err(Error::IncrementOverflow));
    }

    #[test]
    fn upper_case_input_is_accepted_and_output_is_lower_case() {
        assert_eq!(increment("AZ").unwrap(), "b0");
        assert_eq!(increment("Zz"), Err(Error::IncrementOverflow));
    }

    #[test]
    fn rejects_symbols_outside_the_alphabet() {
        assert_eq!(
            increment("00!0"),
            Err(Error::InvalidCharacter {
                byte: b'!',
                index: 2
            })
        );
    }

    #[test]
    fn invalid_symbol_is_rejected_even_where_no_carry_reaches() {
        assert_eq!(
            increment("!0"),
            Err(Error::InvalidCharacter {
                byte: b'!',
                index: 0
            })
        );
        assert_eq!(
            increment("0\u{e9}00"),
            Err(Error::InvalidCharacter {
                byte: 0xc3,
                index: 1
            })
        );
    }

    #[test]
    fn invalid_symbol_leaves_the_buffer_untouched() {
        let mut digits = *b"0-0z";
        assert_eq!(
            increment_in_place(&mut digits),
            Err(Error::InvalidCharacter {
                byte: b'-',
                index: 1
            })
        );
        assert_eq!(&digits, b"0-0z");
    }

    #[test]
    fn successive_increments_are_strictly_increasing() {
        let mut current = String::from("000000000000zzzx");
        for _ in 0..100 {
            let next = increment(&current).unwrap();
            assert!(next > current, "{next} <= {current}");
            current = next;
        }
    }
}
