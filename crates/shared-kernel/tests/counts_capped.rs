// crates/shared-kernel/tests/counts_capped.rs
use char_counter_shared_kernel::{Limit, MatchCount};

fn limit(value: i64) -> Limit {
    Limit::try_new(value).expect("positive limit")
}

#[test]
fn caps_only_when_strictly_above_limit() {
    assert_eq!(MatchCount::from(5).capped_at(limit(3)), 3usize);
    assert_eq!(MatchCount::from(3).capped_at(limit(3)), 3usize);
    assert_eq!(MatchCount::from(2).capped_at(limit(3)), 2usize);
    assert_eq!(MatchCount::ZERO.capped_at(limit(1)), MatchCount::ZERO);
}

#[test]
fn saturating_add_stops_at_max() {
    let max = MatchCount::from(usize::MAX);
    assert_eq!(max.saturating_add(1), max);
    assert_eq!(MatchCount::from(1).saturating_add(2), 3usize);
}
