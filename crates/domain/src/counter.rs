// crates/domain/src/counter.rs
use char_counter_shared_kernel::{IndexRange, MatchCount};

use crate::options::{CountOptions, ScanStrategy};

/// Counts occurrences of `target` inside `range` (positions are chars, not bytes).
#[must_use]
pub fn count_char(text: &str, target: char, range: IndexRange) -> MatchCount {
    scan(text, target, Some(range))
}

/// Sums per-target matches over a text according to [`CountOptions`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CharCounter {
    options: CountOptions,
}

impl CharCounter {
    pub const fn new(options: CountOptions) -> Self {
        Self { options }
    }

    pub const fn options(&self) -> &CountOptions {
        &self.options
    }

    /// Scans the configured range once per target and sums the results.
    ///
    /// Duplicate targets are counted once per occurrence in `targets`. The
    /// limit is applied after the full scan and only when the total is
    /// strictly greater than it.
    #[must_use]
    pub fn count(&self, text: &str, targets: &[char]) -> MatchCount {
        let CountOptions { range, limit, strategy } = self.options;

        let total = match strategy {
            ScanStrategy::Sequential => {
                let mut total = MatchCount::ZERO;
                for &target in targets {
                    total += scan(text, target, range);
                }
                total
            }
            #[cfg(feature = "parallel")]
            ScanStrategy::Parallel => {
                use rayon::prelude::*;
                targets
                    .par_iter()
                    .map(|&target| scan(text, target, range))
                    .reduce(|| MatchCount::ZERO, |acc, count| acc + count)
            }
        };

        log::trace!(
            "counted {} target(s) over {}: total={total}, limit={limit:?}",
            targets.len(),
            range.map_or_else(|| "whole text".to_string(), |r| r.to_string()),
        );

        match limit {
            Some(limit) => total.capped_at(limit),
            None => total,
        }
    }
}

fn scan(text: &str, target: char, range: Option<IndexRange>) -> MatchCount {
    let chars = text.chars();
    let matches = match range {
        Some(range) => chars.skip(range.start()).take(range.width()).filter(|&c| c == target).count(),
        None => chars.filter(|&c| c == target).count(),
    };
    MatchCount::new(matches)
}
