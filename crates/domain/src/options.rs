// crates/domain/src/options.rs
use char_counter_shared_kernel::{IndexRange, Limit};
use derive_builder::Builder;
use serde::Serialize;

/// How per-target scans are scheduled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ScanStrategy {
    /// One target after another on the calling thread.
    #[default]
    Sequential,
    /// Targets spread over the rayon global pool.
    #[cfg(feature = "parallel")]
    Parallel,
}

/// Settings for a single counting run.
///
/// Unset fields mean "whole text" and "no cap".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Builder)]
#[builder(default)]
pub struct CountOptions {
    #[builder(setter(strip_option))]
    pub range: Option<IndexRange>,
    #[builder(setter(strip_option))]
    pub limit: Option<Limit>,
    pub strategy: ScanStrategy,
}

impl CountOptions {
    pub fn builder() -> CountOptionsBuilder {
        CountOptionsBuilder::default()
    }
}
