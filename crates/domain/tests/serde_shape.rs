// crates/domain/tests/serde_shape.rs
use char_counter_domain::CountOptions;
use char_counter_shared_kernel::{IndexRange, Limit};
use serde_json::json;

#[test]
fn default_options_serialize_with_nulls() {
    let value = serde_json::to_value(CountOptions::default()).expect("serializes");
    assert_eq!(value, json!({ "range": null, "limit": null, "strategy": "Sequential" }));
}

#[test]
fn configured_options_serialize_range_and_limit() {
    let options = CountOptions::builder()
        .range(IndexRange::try_new(0, 2, 6).unwrap())
        .limit(Limit::try_new(3).unwrap())
        .build()
        .unwrap();
    let value = serde_json::to_value(options).expect("serializes");
    assert_eq!(
        value,
        json!({ "range": { "start": 0, "end": 2 }, "limit": 3, "strategy": "Sequential" })
    );
}
