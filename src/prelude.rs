//! Prelude module for convenient imports
//!
//! Re-exports the types and functions most hosts need to parse, persist and
//! apply a field update configuration.

// Rule and spec
pub use crate::rule::{
    FieldId, FieldUpdateRule, FieldUpdateRuleBuilder, FieldUpdateSpec, UpdateMode,
    resolve_new_value,
};

// Param translation
pub use crate::descriptor::{from_descriptor_args, to_descriptor_args};
pub use crate::params::{
    IntoFieldUpdate, ParamKeys, RawParams, parse_config, raw_params_from_json, to_config,
};

// Field registry and presentation
pub use crate::registry::{FieldRegistry, LookupFn, display_label};
pub use crate::view::{EditParams, ViewParams};

// Error types
pub use crate::error::{ConfigError, LookupError};

pub use ahash::AHashMap;
