use crate::error::LookupError;
use crate::rule::{FieldId, FieldUpdateSpec};
use ahash::AHashMap;
use std::collections::HashMap;
use tracing::warn;

/// Read-only capability that resolves field identifiers to display labels.
///
/// Implemented by whatever owns the field catalogue; the rule never mutates it.
pub trait FieldRegistry {
    fn label(&self, id: &FieldId) -> Option<String>;

    fn contains(&self, id: &FieldId) -> bool {
        self.label(id).is_some()
    }
}

impl<R: FieldRegistry + ?Sized> FieldRegistry for &R {
    fn label(&self, id: &FieldId) -> Option<String> {
        (**self).label(id)
    }

    fn contains(&self, id: &FieldId) -> bool {
        (**self).contains(id)
    }
}

impl FieldRegistry for AHashMap<String, String> {
    fn label(&self, id: &FieldId) -> Option<String> {
        self.get(id.as_str()).cloned()
    }

    fn contains(&self, id: &FieldId) -> bool {
        self.contains_key(id.as_str())
    }
}

impl FieldRegistry for HashMap<String, String> {
    fn label(&self, id: &FieldId) -> Option<String> {
        self.get(id.as_str()).cloned()
    }

    fn contains(&self, id: &FieldId) -> bool {
        self.contains_key(id.as_str())
    }
}

/// Adapts a closure into a `FieldRegistry`.
pub struct LookupFn<F>(pub F);

impl<F> FieldRegistry for LookupFn<F>
where
    F: Fn(&FieldId) -> Option<String>,
{
    fn label(&self, id: &FieldId) -> Option<String> {
        (self.0)(id)
    }
}

/// Resolves the spec's target field to a human-readable label.
pub fn display_label<R: FieldRegistry + ?Sized>(
    spec: &FieldUpdateSpec,
    registry: &R,
) -> Result<String, LookupError> {
    let id = spec.field_id();
    registry.label(id).ok_or_else(|| {
        warn!(field_id = %id, "Field registry could not resolve field");
        LookupError::UnknownField(id.to_string())
    })
}
