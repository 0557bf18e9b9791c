// crates/shared-kernel/tests/limit.rs
use std::num::NonZeroUsize;

use char_counter_shared_kernel::{Limit, OutOfRangeReason};

#[test]
fn positive_values_are_accepted() {
    assert_eq!(Limit::try_new(1).unwrap().get(), 1);
    assert_eq!(Limit::try_new(42).unwrap(), Limit::new(NonZeroUsize::new(42).unwrap()));
}

#[test]
fn zero_and_negative_are_rejected() {
    for value in [0, -1, i64::MIN] {
        let err = Limit::try_new(value).unwrap_err();
        assert!(err.is_out_of_range());
        assert!(matches!(
            err,
            char_counter_shared_kernel::CharCountError::OutOfRange {
                name: "limit",
                reason: OutOfRangeReason::NotPositive { .. }
            }
        ));
    }
}
