use crate::TimeSource;
use std::time::{SystemTime, UNIX_EPOCH};

/// Wall-clock time source: milliseconds since 1970-01-01 UTC, read from
/// `SystemTime::now()` on every call.
///
/// The wall clock can step backward (NTP, manual changes). Monotonic
/// generators tolerate that by reusing their last timestamp and
/// incrementing, so identifiers never go backward within one generator.
///
/// A clock set before the Unix epoch reads as `0`.
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemClock;

impl TimeSource<u64> for SystemClock {
    #[allow(clippy::cast_possible_truncation)]
    fn current_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    }
}
