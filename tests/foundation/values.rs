//! Integration tests for the value type.

use limeforge_foundation::Value;

#[test]
fn conversions_cover_entity_primitives() {
    assert_eq!(Value::from(true).as_bool(), Some(true));
    assert_eq!(Value::from(42_i64).as_int(), Some(42));
    assert_eq!(Value::from("name").as_str(), Some("name"));
    assert!(Value::Nil.is_nil());
}

#[test]
fn nil_is_distinct_from_empty_string() {
    assert_ne!(Value::Nil, Value::from(""));
    assert!(!Value::from("").is_nil());
}

#[test]
fn signature_lists_keep_parameter_order() {
    let signature = Value::string_list(["self", "dt", "event"]);
    let params: Vec<_> = signature
        .as_list()
        .unwrap()
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert_eq!(params, vec!["self", "dt", "event"]);
}

#[test]
fn values_are_cheap_to_clone_and_compare() {
    let a = Value::string_list(["x", "y"]);
    let b = a.clone();
    assert_eq!(a, b);
}
