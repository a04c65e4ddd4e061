use serde_json::json;

use super::*;
use crate::error::ErrorKind;

#[test]
fn default_registry_has_builtin_colors_in_order() {
    let registry = ColorRegistry::default();
    let colors: Vec<_> = registry.iter().collect();
    assert_eq!(colors, DEFAULT_COLORS);
}

#[test]
fn new_registry_is_empty() {
    let registry = ColorRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
}

#[test]
fn add_appends_at_end() {
    let mut registry = ColorRegistry::default();
    assert!(registry.add("amber"));
    assert_eq!(registry.to_vec().last().map(String::as_str), Some("amber"));
    assert_eq!(registry.len(), DEFAULT_COLORS.len() + 1);
}

#[test]
fn add_duplicate_keeps_set_unchanged() {
    let mut registry = ColorRegistry::default();
    assert!(!registry.add("red"));
    assert_eq!(registry.len(), DEFAULT_COLORS.len());
}

#[test]
fn check_accepts_member() {
    let registry = ColorRegistry::default();
    assert!(registry.check("blue").is_ok());
}

#[test]
fn check_rejects_unknown_with_allowed_list() {
    let registry = ColorRegistry::default();
    let err = registry.check("magenta").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Value);
    match err {
        PointError::Value { color, allowed } => {
            assert_eq!(color, "magenta");
            assert_eq!(allowed, DEFAULT_COLORS);
        }
        other => panic!("Expected Value error, got {other:?}"),
    }
}

#[test]
fn check_is_case_sensitive() {
    let registry = ColorRegistry::default();
    assert!(registry.check("Red").is_err());
}

#[test]
fn check_value_returns_owned_label() {
    let registry = ColorRegistry::default();
    assert_eq!(registry.check_value(&json!("green")).unwrap(), "green");
}

#[test]
fn check_value_rejects_non_strings_as_value_errors() {
    let registry = ColorRegistry::default();
    for value in [json!(1), json!(null), json!(["red"])] {
        let err = registry.check_value(&value).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
    }
}

#[test]
fn global_add_color_is_visible_to_validation() {
    assert!(!is_allowed("registry-test-teal"));
    assert!(add_color("registry-test-teal"));
    assert!(is_allowed("registry-test-teal"));
    assert_eq!(
        validate_color(&json!("registry-test-teal")).unwrap(),
        "registry-test-teal"
    );
    assert!(!add_color("registry-test-teal"));
}

#[test]
fn global_set_starts_with_defaults() {
    let colors = allowed_colors();
    assert_eq!(&colors[..DEFAULT_COLORS.len()], DEFAULT_COLORS);
}
