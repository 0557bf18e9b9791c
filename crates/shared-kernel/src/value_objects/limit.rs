// crates/shared-kernel/src/value_objects/limit.rs
use std::{fmt, num::NonZeroUsize};

use serde::Serialize;

use crate::error::{CharCountError, OutOfRangeReason, Result};

/// Positive upper bound applied to a final count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Limit(NonZeroUsize);

impl Limit {
    pub const fn new(value: NonZeroUsize) -> Self {
        Self(value)
    }

    /// Rejects zero and negative values.
    pub fn try_new(value: i64) -> Result<Self> {
        usize::try_from(value)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Self)
            .ok_or_else(|| CharCountError::out_of_range("limit", OutOfRangeReason::NotPositive { value }))
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl From<NonZeroUsize> for Limit {
    fn from(value: NonZeroUsize) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
