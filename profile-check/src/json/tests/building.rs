//! Tests for the builder API.

use super::super::*;

#[test]
fn test_build_nested_object() {
    let v = obj()
        .set("basicInfo", obj().set("firstName", str("Asha")).set("age", int(29)))
        .set("tags", arr().push(str("a")).push(bool(false)).push(null()));
    assert_eq!(
        v.to_string(),
        r#"{"basicInfo":{"age":29,"firstName":"Asha"},"tags":["a",false,null]}"#
    );
}

#[test]
fn test_set_replaces_non_object() {
    let v = int(1).set("a", int(2));
    assert_eq!(v.to_string(), r#"{"a":2}"#);
}

#[test]
fn test_push_replaces_non_array() {
    let v = str("x").push(int(2));
    assert_eq!(v.to_string(), "[2]");
}

#[test]
fn test_set_on_lazy_value_parses_first() {
    let v = try_parse(br#"{"a": 1}"#).unwrap().set("b", int(2));
    assert!(!v.is_lazy());
    assert_eq!(v.to_string(), r#"{"a":1,"b":2}"#);
}

#[test]
fn test_set_overwrites_key() {
    let v = obj().set("a", int(1)).set("a", str("x"));
    assert_eq!(v.path_str(&["a"]), Some("x".to_string()));
}

#[test]
fn test_clone_is_copy_on_write() {
    let a = obj().set("k", int(1));
    let b = a.clone().set("k", int(2));
    assert_eq!(a.to_string(), r#"{"k":1}"#);
    assert_eq!(b.to_string(), r#"{"k":2}"#);
}

#[test]
fn test_float_builder() {
    let v = obj().set("f", float(1.5));
    assert_eq!(v.to_string(), r#"{"f":1.5}"#);
    assert!(v.path_truthy(&["f"]));
    assert!(!obj().set("f", float(0.0)).path_truthy(&["f"]));
}

#[test]
fn test_from_raw_value() {
    let raw = miniserde::json::Value::Bool(true);
    let v = JsonValue::from(raw);
    assert!(v.path_truthy(&[]));
    assert_eq!(v.to_string(), "true");
}
