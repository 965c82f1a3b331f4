use serde_json::{Value, json};

/// `2, 4, 5, 3, 8, 2` mixed with values that never count, plus two `999` sentinels.
pub fn mixed_values() -> Vec<Value> {
    vec![
        json!(2),
        json!(4),
        json!(5),
        json!(3),
        json!(8),
        json!(2),
        Value::Null,
        json!(true),
        json!({}),
        json!([]),
        json!("string"),
        json!(999),
        json!(999),
    ]
}

/// Records `{"x": v}` for `2, 4, 5, 3, 8, 2` plus two `{"x": 999}` sentinels.
pub fn sentinel_records() -> Vec<Value> {
    [2, 4, 5, 3, 8, 2, 999, 999]
        .into_iter()
        .map(|x| json!({ "x": x }))
        .collect()
}
