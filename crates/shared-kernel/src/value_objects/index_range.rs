// crates/shared-kernel/src/value_objects/index_range.rs
use std::fmt;

use serde::Serialize;

use crate::error::{CharCountError, OutOfRangeReason, Result};

/// Inclusive `[start, end]` range of char positions, validated against a text length.
///
/// A constructed range always satisfies `start <= end < len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct IndexRange {
    start: usize,
    end: usize,
}

impl IndexRange {
    /// Validates signed bounds against a text of `len` chars.
    ///
    /// Checks run in a fixed order: negative start, negative end,
    /// end before start, then end past the last char.
    pub fn try_new(start: i64, end: i64, len: usize) -> Result<Self> {
        if start < 0 {
            return Err(CharCountError::out_of_range(
                "start_index",
                OutOfRangeReason::Negative { value: start },
            ));
        }
        if end < 0 {
            return Err(CharCountError::out_of_range(
                "end_index",
                OutOfRangeReason::Negative { value: end },
            ));
        }
        if end < start {
            return Err(CharCountError::out_of_range(
                "end_index",
                OutOfRangeReason::EndBeforeStart { start, end },
            ));
        }
        // end >= 0 here; anything beyond usize cannot be a valid index either.
        let past_end = || CharCountError::out_of_range("end_index", OutOfRangeReason::PastEnd { end, len });
        let end_idx = usize::try_from(end).map_err(|_| past_end())?;
        if end_idx >= len {
            return Err(past_end());
        }
        // start <= end, so it fits as well.
        let start_idx = usize::try_from(start).map_err(|_| past_end())?;

        Ok(Self { start: start_idx, end: end_idx })
    }

    /// Range covering every char of a text with `len` chars; `None` for empty text.
    pub const fn full(len: usize) -> Option<Self> {
        if len == 0 { None } else { Some(Self { start: 0, end: len - 1 }) }
    }

    #[inline]
    pub const fn start(self) -> usize {
        self.start
    }

    #[inline]
    pub const fn end(self) -> usize {
        self.end
    }

    /// Number of positions covered (always at least one).
    #[inline]
    pub const fn width(self) -> usize {
        self.end - self.start + 1
    }
}

impl fmt::Display for IndexRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
