// crates/shared-kernel/src/lib.rs
pub use error::{CharCountError, ErrorContext, OutOfRangeReason, Result};

pub mod error;
pub mod value_objects;

pub use value_objects::{IndexRange, Limit, MatchCount};
