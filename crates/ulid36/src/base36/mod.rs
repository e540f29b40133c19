mod alphabet;
mod increment;
mod random;
mod time;

pub use alphabet::*;
pub use increment::*;
pub use random::*;
pub use time::*;
