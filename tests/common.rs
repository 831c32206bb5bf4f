//! Common test utilities for building params and registries.
use field_update::prelude::*;

#[allow(dead_code)]
pub const FIELD_ID: &str = "customfield_100";
#[allow(dead_code)]
pub const FIELD_LABEL: &str = "Release notes";

/// Builds a `RawParams` map from key/value pairs.
#[allow(dead_code)]
pub fn params(pairs: &[(&str, &str)]) -> RawParams {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// A registry that knows a single field, `customfield_100`.
#[allow(dead_code)]
pub fn create_registry() -> AHashMap<String, String> {
    let mut fields = AHashMap::new();
    fields.insert(FIELD_ID.to_string(), FIELD_LABEL.to_string());
    fields.insert("customfield_200".to_string(), "Approver".to_string());
    fields
}

/// A rule bound to `create_registry()` with the canonical param keys.
#[allow(dead_code)]
pub fn create_rule() -> FieldUpdateRule<AHashMap<String, String>> {
    FieldUpdateRule::new(create_registry())
}

/// Form params for an append-mode step.
#[allow(dead_code)]
pub fn create_append_params() -> RawParams {
    params(&[
        ("fieldId", FIELD_ID),
        ("fieldValue", "x"),
        ("appendValue", " !"),
    ])
}
