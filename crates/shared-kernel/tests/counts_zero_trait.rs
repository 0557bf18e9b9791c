// crates/shared-kernel/tests/counts_zero_trait.rs
use char_counter_shared_kernel::MatchCount;
use num_traits::Zero;

#[test]
fn zero_trait_consistency() {
    let mut count = MatchCount::from(5);
    count.set_zero();
    assert!(Zero::is_zero(&count));
    assert_eq!(count, MatchCount::ZERO);
    assert_eq!(<MatchCount as Zero>::zero(), MatchCount::zero());
}

#[test]
fn default_matches_zero() {
    assert_eq!(MatchCount::default(), MatchCount::zero());
    assert!(MatchCount::default().is_zero());
    assert_eq!(MatchCount::from(9).to_string(), "9");
}
