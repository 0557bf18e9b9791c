//! Count occurrences of a set of target characters in a string.
//!
//! Three entry points share one counting routine:
//!
//! - [`count`] scans the whole text.
//! - [`count_in_range`] restricts the scan to an inclusive char index range.
//! - [`count_in_range_with_limit`] also caps the returned total.
//!
//! ```
//! let total = char_counter::count(Some("banana"), Some(&['a', 'n'][..])).unwrap();
//! assert_eq!(total, 5usize);
//! ```
//!
//! Indices are positions in the text's sequence of `char`s. The cap is
//! applied after the scan: a total equal to the limit is returned as is.

pub mod api;

pub use api::{count, count_in_range, count_in_range_with_limit};
pub use char_counter_domain::{
    CharCounter, CountOptions, CountOptionsBuilder, CountOptionsBuilderError, ScanStrategy,
    count_char,
};
pub use char_counter_shared_kernel::{
    CharCountError, ErrorContext, IndexRange, Limit, MatchCount, OutOfRangeReason, Result,
};
