mod ulid36;

pub use ulid36::*;
