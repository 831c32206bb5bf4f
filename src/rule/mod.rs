use crate::descriptor;
use crate::error::{ConfigError, LookupError};
use crate::params::{self, ParamKeys, RawParams};
use crate::registry::{self, FieldRegistry};
use crate::view::ViewParams;

mod resolve;
mod spec;

pub use resolve::resolve_new_value;
pub use spec::{FieldId, FieldUpdateSpec, UpdateMode};

/// Update-or-append rule bound to a field registry.
///
/// The rule itself is stateless: it carries the injected registry and the
/// param key names, and every operation is a pure transformation over a
/// `FieldUpdateSpec`.
pub struct FieldUpdateRule<R: FieldRegistry> {
    registry: R,
    keys: ParamKeys,
}

pub struct FieldUpdateRuleBuilder<R: FieldRegistry> {
    registry: R,
    keys: ParamKeys,
}

impl<R: FieldRegistry> FieldUpdateRuleBuilder<R> {
    pub fn new(registry: R) -> Self {
        Self {
            registry,
            keys: ParamKeys::default(),
        }
    }

    /// Overrides the param key names used by `parse_config` and `to_config`.
    pub fn with_keys(mut self, keys: ParamKeys) -> Self {
        self.keys = keys;
        self
    }

    pub fn build(self) -> FieldUpdateRule<R> {
        FieldUpdateRule {
            registry: self.registry,
            keys: self.keys,
        }
    }
}

impl<R: FieldRegistry> FieldUpdateRule<R> {
    /// Creates a rule with the canonical param keys.
    pub fn new(registry: R) -> Self {
        FieldUpdateRuleBuilder::new(registry).build()
    }

    pub fn builder(registry: R) -> FieldUpdateRuleBuilder<R> {
        FieldUpdateRuleBuilder::new(registry)
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn keys(&self) -> &ParamKeys {
        &self.keys
    }

    pub fn parse_config(&self, raw: &RawParams) -> Result<FieldUpdateSpec, ConfigError> {
        params::parse_config_with(raw, &self.keys)
    }

    pub fn to_config(&self, spec: &FieldUpdateSpec) -> RawParams {
        params::to_config_with(spec, &self.keys)
    }

    pub fn resolve_new_value(&self, spec: &FieldUpdateSpec, current_value: Option<&str>) -> String {
        resolve_new_value(spec, current_value)
    }

    pub fn display_label(&self, spec: &FieldUpdateSpec) -> Result<String, LookupError> {
        registry::display_label(spec, &self.registry)
    }

    /// Parses UI params and re-encodes them as persisted workflow-step arguments.
    pub fn descriptor_args(&self, raw: &RawParams) -> Result<RawParams, ConfigError> {
        let spec = self.parse_config(raw)?;
        Ok(descriptor::to_descriptor_args(&spec))
    }

    /// Builds the summary shown for a configured step.
    pub fn view_params(&self, spec: &FieldUpdateSpec) -> Result<ViewParams, LookupError> {
        ViewParams::resolve(spec, &self.registry)
    }
}
