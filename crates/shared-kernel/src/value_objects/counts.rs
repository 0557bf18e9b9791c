// crates/shared-kernel/src/value_objects/counts.rs
use std::{
    iter::Sum,
    ops::{Add, AddAssign},
};

use serde::{Deserialize, Serialize};

use super::Limit;

/// Number of matched characters produced by a counting run.
///
/// Arithmetic saturates at `usize::MAX` instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[must_use]
#[serde(transparent)]
pub struct MatchCount(usize);

impl MatchCount {
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Saturating cap: `limit` when the count strictly exceeds it, otherwise the count itself.
    #[inline]
    pub const fn capped_at(self, limit: Limit) -> Self {
        if self.0 > limit.get() { Self(limit.get()) } else { self }
    }

    #[inline]
    pub const fn saturating_add(self, rhs: usize) -> Self {
        Self(self.0.saturating_add(rhs))
    }
}

impl Default for MatchCount {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for MatchCount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.saturating_add(rhs.0)
    }
}

impl Add<usize> for MatchCount {
    type Output = Self;

    fn add(self, rhs: usize) -> Self::Output {
        self.saturating_add(rhs)
    }
}

impl AddAssign for MatchCount {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.saturating_add(rhs.0);
    }
}

impl AddAssign<usize> for MatchCount {
    fn add_assign(&mut self, rhs: usize) {
        *self = self.saturating_add(rhs);
    }
}

impl Sum for MatchCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, count| acc + count)
    }
}

impl<'a> Sum<&'a MatchCount> for MatchCount {
    fn sum<I: Iterator<Item = &'a MatchCount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Sum<usize> for MatchCount {
    fn sum<I: Iterator<Item = usize>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, value| acc.saturating_add(value))
    }
}

impl num_traits::Zero for MatchCount {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl From<usize> for MatchCount {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl From<MatchCount> for usize {
    fn from(count: MatchCount) -> Self {
        count.value()
    }
}

impl PartialEq<usize> for MatchCount {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

impl PartialEq<MatchCount> for usize {
    fn eq(&self, other: &MatchCount) -> bool {
        *self == other.0
    }
}

mod display {
    use std::fmt;

    use super::MatchCount;

    impl fmt::Display for MatchCount {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }
}
