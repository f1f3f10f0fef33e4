#![cfg(feature = "serde")]

use mvvm_union::{Kind, Union};
use serde_json::json;

#[test]
fn serialize_untagged() {
    let values = vec![
        Union::Undefined,
        Union::from(3i32),
        Union::from(true),
        Union::from("label"),
        Union::from(1.5f64),
    ];

    assert_eq!(
        serde_json::to_value(&values).unwrap(),
        json!([null, 3, true, "label", 1.5])
    );
}

#[test]
fn serialize_kind_names() {
    assert_eq!(serde_json::to_value(Kind::I32).unwrap(), json!("i32"));
    assert_eq!(serde_json::to_value(Kind::Undefined).unwrap(), json!("undefined"));
}
