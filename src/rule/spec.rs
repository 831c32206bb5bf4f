use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a field on a tracked record (e.g. `customfield_100`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FieldId(String);

impl FieldId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for FieldId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// How a configured rule rewrites the target field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode<'a> {
    /// Overwrite the field with the configured value (empty when none is configured).
    Replace(Option<&'a str>),
    /// Concatenate the fragment onto the field's current value.
    Append(&'a str),
}

/// A validated, immutable configuration of a single field update.
///
/// All strings are stored trimmed. `append_value` is never blank: a blank
/// fragment is dropped at construction, which puts the rule in replace mode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SpecFields", rename_all = "camelCase")]
pub struct FieldUpdateSpec {
    field_id: FieldId,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    append_value: Option<String>,
}

impl FieldUpdateSpec {
    /// Builds a spec, trimming every input.
    ///
    /// Fails with `ConfigError::MissingField` when `field_id` is blank.
    pub fn new(
        field_id: &str,
        value: Option<&str>,
        append_value: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let field_id = field_id.trim();
        if field_id.is_empty() {
            return Err(ConfigError::MissingField("fieldId".to_string()));
        }

        let append_value = append_value
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .map(str::to_string);

        Ok(Self {
            field_id: FieldId(field_id.to_string()),
            value: value.map(|v| v.trim().to_string()),
            append_value,
        })
    }

    /// Shorthand for a replace-mode spec.
    pub fn replace(field_id: &str, value: Option<&str>) -> Result<Self, ConfigError> {
        Self::new(field_id, value, None)
    }

    /// Shorthand for an append-mode spec. A blank fragment yields a replace-mode
    /// spec with no value.
    pub fn append(field_id: &str, fragment: &str) -> Result<Self, ConfigError> {
        Self::new(field_id, None, Some(fragment))
    }

    pub fn field_id(&self) -> &FieldId {
        &self.field_id
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn append_value(&self) -> Option<&str> {
        self.append_value.as_deref()
    }

    pub fn is_append(&self) -> bool {
        self.append_value.is_some()
    }

    /// The active mode. Append wins whenever a fragment is configured.
    pub fn mode(&self) -> UpdateMode<'_> {
        match self.append_value.as_deref() {
            Some(fragment) => UpdateMode::Append(fragment),
            None => UpdateMode::Replace(self.value.as_deref()),
        }
    }
}

/// Unvalidated mirror of `FieldUpdateSpec` used when deserializing.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SpecFields {
    field_id: String,
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    append_value: Option<String>,
}

impl TryFrom<SpecFields> for FieldUpdateSpec {
    type Error = ConfigError;

    fn try_from(fields: SpecFields) -> Result<Self, Self::Error> {
        Self::new(
            &fields.field_id,
            fields.value.as_deref(),
            fields.append_value.as_deref(),
        )
    }
}
