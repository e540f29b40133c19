mod basic;
mod basic_mono;
mod interface;
mod lock_mono;
mod mutex;
mod state;
mod thread_local;

pub use basic::*;
pub use basic_mono::*;
pub use interface::*;
pub use lock_mono::*;
pub(crate) use mutex::*;
pub use state::*;
pub use thread_local::*;
