// crates/domain/src/lib.rs
pub mod counter;
pub mod options;

pub use counter::{CharCounter, count_char};
pub use options::{CountOptions, CountOptionsBuilder, CountOptionsBuilderError, ScanStrategy};
