//! Fixed-length, base-36 identifiers with a shift-ciphered timestamp prefix
//! and an incrementable random suffix.
//!
//! An identifier is 25 symbols from `0-9a-z`: nine symbols encode a
//! millisecond timestamp, sixteen carry a random payload. Monotonic
//! generators increment the payload instead of redrawing it when several
//! identifiers share a timestamp, so identifiers minted within one time unit
//! sort in creation order.
//!
//! ```
//! use ulid36::{BasicMonoUlid36Generator, SystemClock, ThreadRandom, decode_time};
//!
//! let generator = BasicMonoUlid36Generator::new(SystemClock, ThreadRandom);
//! let a = generator.generate(Some(1_700_000_000_000)).unwrap();
//! let b = generator.generate(Some(1_700_000_000_000)).unwrap();
//! assert!(a < b);
//! assert_eq!(decode_time(b.as_str()).unwrap(), 1_700_000_000_000);
//! ```
//!
//! ## Features
//! - `serde`: (de)serialize [`Ulid36`] as its string form
//! - `tracing`: trace-level spans around generation calls
//! - `parking-lot`: use `parking_lot::Mutex` in [`LockMonoUlid36Generator`]

mod base36;
mod error;
mod generator;
mod id;
mod rand;
#[cfg(feature = "serde")]
mod serde;
mod time;

pub use crate::base36::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::id::*;
pub use crate::rand::*;
#[cfg(feature = "serde")]
pub use crate::serde::*;
pub use crate::time::*;
