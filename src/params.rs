//! Translation layer between flat string params and `FieldUpdateSpec`.
//!
//! Host UIs and stored configurations speak a string-typed key/value shape in
//! which an unset value is written as the literal token `"null"`. All of that
//! is decoded here, so the rule itself only ever sees `Option`s.

use crate::error::ConfigError;
use crate::rule::FieldUpdateSpec;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use tracing::debug;

/// Flat key/value mapping used for both UI input and stored configuration.
pub type RawParams = AHashMap<String, String>;

/// Literal written in place of an unset value.
pub const NULL_SENTINEL: &str = "null";

pub const PARAM_FIELD_ID: &str = "fieldId";
pub const PARAM_FIELD_VALUE: &str = "fieldValue";
pub const PARAM_APPEND_VALUE: &str = "appendValue";

/// Names of the three params that make up a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParamKeys {
    pub field_id: String,
    pub field_value: String,
    pub append_value: String,
}

impl Default for ParamKeys {
    fn default() -> Self {
        Self {
            field_id: PARAM_FIELD_ID.to_string(),
            field_value: PARAM_FIELD_VALUE.to_string(),
            append_value: PARAM_APPEND_VALUE.to_string(),
        }
    }
}

/// A trait for host-side param shapes that can be decoded into a `FieldUpdateSpec`.
pub trait IntoFieldUpdate {
    fn into_field_update(self) -> Result<FieldUpdateSpec, ConfigError>;
}

impl IntoFieldUpdate for RawParams {
    fn into_field_update(self) -> Result<FieldUpdateSpec, ConfigError> {
        parse_config(&self)
    }
}

impl IntoFieldUpdate for HashMap<String, String> {
    fn into_field_update(self) -> Result<FieldUpdateSpec, ConfigError> {
        let raw: RawParams = self.into_iter().collect();
        parse_config(&raw)
    }
}

/// Parses canonical params (`fieldId`, `fieldValue`, `appendValue`).
pub fn parse_config(raw: &RawParams) -> Result<FieldUpdateSpec, ConfigError> {
    parse_config_with(raw, &ParamKeys::default())
}

/// Parses params stored under custom key names.
///
/// `fieldId` must be non-blank and `fieldValue` must be present, although it
/// may be blank. A blank `appendValue` is discarded.
pub fn parse_config_with(
    raw: &RawParams,
    keys: &ParamKeys,
) -> Result<FieldUpdateSpec, ConfigError> {
    let field_id = raw
        .get(&keys.field_id)
        .map(|id| id.trim())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ConfigError::MissingField(keys.field_id.clone()))?;

    let value = raw
        .get(&keys.field_value)
        .ok_or_else(|| ConfigError::MissingField(keys.field_value.clone()))?;
    let value = decode_nullable(value);

    let append_value = match raw.get(&keys.append_value) {
        Some(fragment) if fragment.trim().is_empty() => {
            debug!(field_id, key = %keys.append_value, "Discarding blank append fragment");
            None
        }
        other => other.map(String::as_str),
    };

    FieldUpdateSpec::new(field_id, value, append_value)
}

/// Serializes a spec to canonical params.
pub fn to_config(spec: &FieldUpdateSpec) -> RawParams {
    to_config_with(spec, &ParamKeys::default())
}

/// Serializes a spec under custom key names.
///
/// An unset value is written as `"null"`; an unset append fragment is omitted.
pub fn to_config_with(spec: &FieldUpdateSpec, keys: &ParamKeys) -> RawParams {
    let mut params = RawParams::new();
    params.insert(keys.field_id.clone(), spec.field_id().to_string());
    params.insert(keys.field_value.clone(), encode_nullable(spec.value()));
    if let Some(fragment) = spec.append_value() {
        params.insert(keys.append_value.clone(), fragment.to_string());
    }
    params
}

/// Reads raw params from a JSON object as submitted by a host form.
///
/// Each value may be a string or an array of strings, in which case only the
/// first element is used. `null` and empty arrays count as absent.
pub fn raw_params_from_json(json: &str) -> Result<RawParams, ConfigError> {
    let parsed: JsonValue =
        serde_json::from_str(json).map_err(|e| ConfigError::JsonParseError(e.to_string()))?;
    let JsonValue::Object(entries) = parsed else {
        return Err(ConfigError::JsonParseError(
            "expected a JSON object of parameters".to_string(),
        ));
    };

    let mut params = RawParams::with_capacity(entries.len());
    for (key, value) in entries {
        if let Some(single) = extract_single_param(&key, &value)? {
            params.insert(key, single);
        }
    }
    Ok(params)
}

fn extract_single_param(key: &str, value: &JsonValue) -> Result<Option<String>, ConfigError> {
    match value {
        JsonValue::Null => Ok(None),
        JsonValue::String(s) => Ok(Some(s.clone())),
        JsonValue::Array(items) => match items.first() {
            None | Some(JsonValue::Null) => Ok(None),
            Some(JsonValue::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(ConfigError::InvalidParam {
                key: key.to_string(),
                message: format!("expected a string element, found {}", other),
            }),
        },
        other => Err(ConfigError::InvalidParam {
            key: key.to_string(),
            message: format!("expected a string or list of strings, found {}", other),
        }),
    }
}

/// Trims a stored value and maps the `"null"` sentinel to absence.
pub(crate) fn decode_nullable(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed == NULL_SENTINEL {
        debug!("Normalizing \"null\" sentinel to an unset value");
        None
    } else {
        Some(trimmed)
    }
}

pub(crate) fn encode_nullable(value: Option<&str>) -> String {
    value.unwrap_or(NULL_SENTINEL).to_string()
}
