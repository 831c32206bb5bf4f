//! Persisted workflow-step arguments.
//!
//! Once a step is saved the host stores its arguments under dotted keys that
//! differ from the form params. Reading them back is lenient: a missing value
//! and the `"null"` sentinel both mean "no value configured".

use crate::error::ConfigError;
use crate::params::{self, RawParams, decode_nullable, encode_nullable};
use crate::rule::FieldUpdateSpec;

pub const ARG_FIELD_NAME: &str = "field.name";
pub const ARG_FIELD_VALUE: &str = "field.value";
pub const ARG_APPEND_VALUE: &str = "append.value";

/// Encodes a spec as stored step arguments.
pub fn to_descriptor_args(spec: &FieldUpdateSpec) -> RawParams {
    let mut args = RawParams::new();
    args.insert(ARG_FIELD_NAME.to_string(), spec.field_id().to_string());
    args.insert(ARG_FIELD_VALUE.to_string(), encode_nullable(spec.value()));
    if let Some(fragment) = spec.append_value() {
        args.insert(ARG_APPEND_VALUE.to_string(), fragment.to_string());
    }
    args
}

/// Decodes stored step arguments back into a spec.
pub fn from_descriptor_args(args: &RawParams) -> Result<FieldUpdateSpec, ConfigError> {
    let field_id = args
        .get(ARG_FIELD_NAME)
        .map(|id| id.trim())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ConfigError::MissingField(ARG_FIELD_NAME.to_string()))?;
    let value = args
        .get(ARG_FIELD_VALUE)
        .and_then(|value| decode_nullable(value));
    let append_value = args.get(ARG_APPEND_VALUE).map(String::as_str);

    FieldUpdateSpec::new(field_id, value, append_value)
}

/// Converts canonical form params straight into stored step arguments.
pub fn descriptor_args_from_params(raw: &RawParams) -> Result<RawParams, ConfigError> {
    let spec = params::parse_config(raw)?;
    Ok(to_descriptor_args(&spec))
}
