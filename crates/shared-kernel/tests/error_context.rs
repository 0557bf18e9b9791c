// crates/shared-kernel/tests/error_context.rs
use char_counter_shared_kernel::{CharCountError, ErrorContext, Limit};

#[test]
fn context_wraps_and_formats() {
    let err = Limit::try_new(0).context("building limit").unwrap_err();

    let display = err.to_string();
    assert!(display.contains("building limit"));
    assert!(display.contains("'limit' must be positive (got 0)"));
    assert_eq!(err.category(), "out_of_range");
    assert!(err.is_out_of_range());
    assert!(matches!(err.root(), CharCountError::OutOfRange { .. }));
}

#[test]
fn invalid_argument_category() {
    let err: Result<(), _> = Err(CharCountError::invalid_argument("text"));
    let err = err.with_context(|| "counting".to_string()).unwrap_err();
    assert_eq!(err.category(), "invalid_argument");
    assert!(err.is_invalid_argument());
    assert!(!err.is_out_of_range());
    assert_eq!(err.root().to_string(), "Invalid argument: 'text' must be provided");
}
