mod detect;
mod insecure_random;
mod interface;
mod os_random;
mod thread_random;

pub use detect::*;
pub use insecure_random::*;
pub use interface::*;
pub use os_random::*;
pub use thread_random::*;
