// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod index_range;
pub mod limit;

pub use counts::MatchCount;
pub use index_range::IndexRange;
pub use limit::Limit;
