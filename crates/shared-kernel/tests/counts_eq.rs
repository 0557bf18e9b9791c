// crates/shared-kernel/tests/counts_eq.rs
use char_counter_shared_kernel::MatchCount;

#[test]
fn eq_with_usize_both_sides() {
    let count = MatchCount::from(7);
    assert!(count == 7usize);
    assert!(7usize == count);
}
