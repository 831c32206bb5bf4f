//! # field-update - Update-or-Append Field Rule
//!
//! **field-update** holds the decision logic behind a workflow step that writes
//! one field on a tracked record. The step either replaces the field with a
//! configured value or appends a fragment to whatever the field currently holds.
//!
//! ## Core Workflow
//!
//! The crate is host-agnostic. It works on a typed `FieldUpdateSpec` and keeps
//! the string-typed param shapes of the host at the edges:
//!
//! 1.  **Parse**: Turn form params (`fieldId`, `fieldValue`, `appendValue`) into a validated spec with `parse_config`.
//! 2.  **Persist**: Write the spec back with `to_config`, or as stored step arguments with `to_descriptor_args`.
//! 3.  **Resolve**: Compute the field's new value from its current value with `resolve_new_value`.
//! 4.  **Present**: Look up a display label through an injected `FieldRegistry`.
//!
//! ## Quick Start
//!
//! ```rust
//! use field_update::prelude::*;
//!
//! let mut fields = AHashMap::new();
//! fields.insert("customfield_100".to_string(), "Release notes".to_string());
//! let rule = FieldUpdateRule::new(fields);
//!
//! let mut raw = RawParams::new();
//! raw.insert("fieldId".to_string(), "customfield_100".to_string());
//! raw.insert("fieldValue".to_string(), "x".to_string());
//! raw.insert("appendValue".to_string(), " !".to_string());
//!
//! let spec = rule.parse_config(&raw).unwrap();
//! assert_eq!(rule.resolve_new_value(&spec, Some("abc")), "abc!");
//! assert_eq!(rule.display_label(&spec).unwrap(), "Release notes");
//! ```

pub mod descriptor;
pub mod error;
pub mod params;
pub mod prelude;
pub mod registry;
pub mod rule;
pub mod view;
