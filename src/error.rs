use thiserror::Error;

/// Errors that can occur while decoding a field update configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Required parameter '{0}' is missing or blank")]
    MissingField(String),

    #[error("Failed to parse parameters JSON: {0}")]
    JsonParseError(String),

    #[error("Parameter '{key}' has an unsupported shape: {message}")]
    InvalidParam { key: String, message: String },
}

/// Errors raised when resolving a field identifier through a `FieldRegistry`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Field '{0}' is not known to the field registry")]
    UnknownField(String),
}
