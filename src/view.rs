use crate::descriptor;
use crate::error::{ConfigError, LookupError};
use crate::params::RawParams;
use crate::registry::{self, FieldRegistry};
use crate::rule::FieldUpdateSpec;
use serde::Serialize;

/// Form state restored when an existing step is opened for editing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditParams {
    pub field_id: String,
    pub field_value: Option<String>,
    pub append_value: Option<String>,
}

impl EditParams {
    pub fn from_spec(spec: &FieldUpdateSpec) -> Self {
        Self {
            field_id: spec.field_id().to_string(),
            field_value: spec.value().map(str::to_string),
            append_value: spec.append_value().map(str::to_string),
        }
    }

    pub fn from_descriptor_args(args: &RawParams) -> Result<Self, ConfigError> {
        descriptor::from_descriptor_args(args).map(|spec| Self::from_spec(&spec))
    }
}

/// Read-only summary of a configured step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewParams {
    /// Label of the target field as reported by the registry.
    pub field_label: String,
    pub field_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub append_value: Option<String>,
}

impl ViewParams {
    pub fn resolve<R: FieldRegistry + ?Sized>(
        spec: &FieldUpdateSpec,
        registry: &R,
    ) -> Result<Self, LookupError> {
        Ok(Self {
            field_label: registry::display_label(spec, registry)?,
            field_value: spec.value().map(str::to_string),
            append_value: spec.append_value().map(str::to_string),
        })
    }
}
