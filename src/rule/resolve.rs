use super::spec::{FieldUpdateSpec, UpdateMode};

/// Computes the value to store in the target field.
///
/// In append mode the fragment is concatenated onto `current_value` (an absent
/// current value counts as empty) with no separator. In replace mode the
/// configured value is returned, or an empty string when none is configured,
/// and `current_value` is ignored.
pub fn resolve_new_value(spec: &FieldUpdateSpec, current_value: Option<&str>) -> String {
    match spec.mode() {
        UpdateMode::Append(fragment) => {
            let current = current_value.unwrap_or_default();
            let mut updated = String::with_capacity(current.len() + fragment.len());
            updated.push_str(current);
            updated.push_str(fragment);
            updated
        }
        UpdateMode::Replace(value) => value.unwrap_or_default().to_string(),
    }
}
