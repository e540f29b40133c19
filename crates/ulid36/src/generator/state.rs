use crate::{
    ID_LEN, RANDOM_LEN, RandSource, Result, TIME_LEN, Ulid36,
    base36::{encode_random_into, encode_time_into, increment_in_place},
};

/// The last-seen state of a monotonic generator: the last time it moved to
/// and the last emitted random suffix.
///
/// `last_time` is kept as given, not reduced to what nine symbols can hold,
/// so a repeated time at or past [`TIME_SPAN`](crate::TIME_SPAN) still
/// increments instead of drawing.
///
/// A fresh state is empty (`last_time == 0`, no suffix). The value is `Copy`
/// and [`MonoState::step`] returns the successor instead of mutating, so a
/// generator can publish the new state only once an identifier was produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MonoState {
    last_time: u64,
    last_random: Option<[u8; RANDOM_LEN]>,
}

impl MonoState {
    /// Restores a state from a previously emitted identifier.
    #[must_use]
    pub fn from_id(id: &Ulid36) -> Self {
        Self {
            last_time: id.timestamp(),
            last_random: Some(id.random_bytes()),
        }
    }

    pub(crate) const fn resume(last_time: u64, last_random: [u8; RANDOM_LEN]) -> Self {
        Self {
            last_time,
            last_random: Some(last_random),
        }
    }

    /// Time the generator last moved to, `0` for an empty state.
    #[must_use]
    pub const fn last_time(&self) -> u64 {
        self.last_time
    }

    /// Random suffix of the last identifier, if any was emitted.
    #[must_use]
    pub fn last_random(&self) -> Option<&str> {
        self.last_random
            .as_ref()
            // SAFETY: suffixes are only stored after being produced by the
            // encoder or the incrementer, both of which emit ASCII symbols.
            .map(|r| unsafe { core::str::from_utf8_unchecked(r) })
    }

    /// Computes the next identifier for time `now`.
    ///
    /// - `now <= last_time` (same or earlier instant): keeps `last_time` and
    ///   increments the previous suffix.
    /// - otherwise, or for an empty state: moves to `now` and draws a fresh
    ///   suffix from `rng`.
    ///
    /// # Errors
    ///
    /// - [`Error::IncrementOverflow`](crate::Error::IncrementOverflow) when
    ///   the previous suffix is already all `z`
    /// - [`Error::InvalidTimestamp`](crate::Error::InvalidTimestamp) when
    ///   `now` exceeds [`TIME_MAX`](crate::TIME_MAX)
    ///
    /// On error `self` is unchanged and no draw was consumed from `rng`.
    pub fn step<R>(self, now: u64, rng: &R) -> Result<(Self, Ulid36)>
    where
        R: RandSource<f64> + ?Sized,
    {
        match self.last_random {
            Some(mut random) if now <= self.last_time => {
                increment_in_place(&mut random)?;
                let id = Ulid36::from_canonical_parts(self.last_time, &random)?;
                let next = Self {
                    last_time: self.last_time,
                    last_random: Some(random),
                };
                Ok((next, id))
            }
            _ => {
                let mut buf = [0_u8; ID_LEN];
                encode_time_into(now, &mut buf[..TIME_LEN])?;
                encode_random_into(&mut buf[TIME_LEN..], rng);
                let id = Ulid36::from_encoded(buf, now);
                Ok((Self::resume(now, id.random_bytes()), id))
            }
        }
    }
}
