//! Tests for path accessors in both lazy and parsed modes.

use super::super::*;

const DOC: &[u8] = br#"{"basicInfo":{"firstName":"Asha","age":30,"verified":true,"nickname":null},"careerDetails":"none"}"#;

fn both_modes() -> [JsonValue; 2] {
    [try_parse(DOC).unwrap(), try_parse_full(DOC).unwrap()]
}

#[test]
fn test_path_accessors() {
    for v in both_modes() {
        assert_eq!(v.path_str(&["basicInfo", "firstName"]), Some("Asha".to_string()));
        assert_eq!(v.path_str(&["basicInfo", "missing"]), None);
        assert!(v.path_exists(&["basicInfo", "nickname"]));
        assert!(v.path_is_null(&["basicInfo", "nickname"]));
        assert!(!v.path_is_null(&["basicInfo", "firstName"]));
    }
}

#[test]
fn test_type_mismatch_is_none() {
    for v in both_modes() {
        assert_eq!(v.path_str(&["basicInfo", "age"]), None);
        assert_eq!(v.path_str(&["basicInfo", "verified"]), None);
        assert_eq!(v.path_str(&["basicInfo", "nickname"]), None);
    }
}

#[test]
fn test_descending_through_non_object() {
    for v in both_modes() {
        assert!(!v.path_exists(&["careerDetails", "occupation"]));
        assert!(!v.path_truthy(&["careerDetails", "occupation"]));
        assert!(!v.path_exists(&["basicInfo", "firstName", "deeper"]));
    }
}

#[test]
fn test_path_truthy_both_modes() {
    for v in both_modes() {
        assert!(v.path_truthy(&["basicInfo", "firstName"]));
        assert!(v.path_truthy(&["basicInfo", "age"]));
        assert!(v.path_truthy(&["basicInfo", "verified"]));
        assert!(!v.path_truthy(&["basicInfo", "nickname"]));
        assert!(!v.path_truthy(&["basicInfo", "missing"]));
        assert!(v.path_truthy(&["careerDetails"]));
    }
}

#[test]
fn test_empty_path_is_root() {
    for v in both_modes() {
        assert!(v.path_exists(&[]));
        assert!(v.path_truthy(&[]));
    }
}

#[test]
fn test_large_numbers_agree() {
    let json = br#"{"n": 18446744073709551615, "big": 1e300}"#;
    for v in [try_parse(json).unwrap(), try_parse_full(json).unwrap()] {
        assert!(v.path_truthy(&["n"]));
        assert!(v.path_truthy(&["big"]));
    }
}

#[test]
fn test_overflowing_number_is_falsy() {
    let json = br#"{"basicInfo": {"age": 1e999}}"#;
    assert!(!try_parse(json).unwrap().path_truthy(&["basicInfo", "age"]));
    assert!(try_parse_full(json).is_none());
}

#[test]
fn test_path_on_built_values() {
    let v = obj().set("lifestyleHobbies", obj().set("diet", str("Vegan")));
    assert_eq!(v.path_str(&["lifestyleHobbies", "diet"]), Some("Vegan".to_string()));
    assert!(v.path_truthy(&["lifestyleHobbies", "diet"]));
}

#[test]
fn test_duplicate_keys_first_wins_in_lazy_mode() {
    let v = try_parse(br#"{"a": "", "a": "x"}"#).unwrap();
    assert_eq!(v.path_str(&["a"]), Some(String::new()));
}
