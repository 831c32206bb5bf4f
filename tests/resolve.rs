//! Tests for computing a field's new value.
mod common;
use common::*;
use field_update::prelude::*;
use proptest::prelude::*;

#[test]
fn test_append_scenario() {
    let rule = create_rule();
    let spec = rule.parse_config(&create_append_params()).unwrap();
    assert_eq!(rule.resolve_new_value(&spec, Some("abc")), "abc!");
    assert_eq!(rule.resolve_new_value(&spec, None), "!");
}

#[test]
fn test_replace_ignores_current_value() {
    let spec = FieldUpdateSpec::replace("f", Some("v")).unwrap();
    assert_eq!(resolve_new_value(&spec, Some("ignored")), "v");
    assert_eq!(resolve_new_value(&spec, None), "v");
}

#[test]
fn test_append_inserts_no_separator() {
    let spec = FieldUpdateSpec::append("f", ", second").unwrap();
    // Fragments are trimmed, so a leading separator must be non-whitespace.
    assert_eq!(resolve_new_value(&spec, Some("first")), "first, second");
}

#[test]
fn test_blank_append_falls_back_to_replace() {
    let spec = FieldUpdateSpec::append("f", "   ").unwrap();
    assert_eq!(spec.mode(), UpdateMode::Replace(None));
    assert_eq!(resolve_new_value(&spec, Some("old")), "");
}

proptest! {
    #[test]
    fn replace_is_independent_of_current_value(
        value in proptest::option::of("[a-z ]{0,12}"),
        current in proptest::option::of(".{0,12}"),
    ) {
        let spec = FieldUpdateSpec::replace("f", value.as_deref()).unwrap();
        let expected = spec.value().unwrap_or_default().to_string();
        prop_assert_eq!(resolve_new_value(&spec, current.as_deref()), expected);
    }

    #[test]
    fn append_concatenates_onto_current_value(
        fragment in "[a-z!.-]{1,8}",
        current in proptest::option::of(".{0,12}"),
    ) {
        let spec = FieldUpdateSpec::append("f", &fragment).unwrap();
        let expected = format!("{}{}", current.as_deref().unwrap_or_default(), fragment);
        prop_assert_eq!(resolve_new_value(&spec, current.as_deref()), expected);
    }

    #[test]
    fn canonical_params_round_trip(
        field_id in "[a-z_0-9]{1,16}",
        value in "[a-z0-9]{0,8}",
        fragment in proptest::option::of("[a-z!]{1,8}"),
    ) {
        prop_assume!(value != "null");
        let mut raw = params(&[("fieldId", field_id.as_str()), ("fieldValue", value.as_str())]);
        if let Some(fragment) = &fragment {
            raw.insert("appendValue".to_string(), fragment.clone());
        }
        let spec = parse_config(&raw).unwrap();
        prop_assert_eq!(to_config(&spec), raw);
    }
}
