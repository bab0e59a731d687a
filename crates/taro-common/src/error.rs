//! Error types for Taro configuration
//!
//! `TaroError` covers everything a configuration setter or property source
//! can reject.

/// Configuration error types
#[derive(thiserror::Error, Debug)]
pub enum TaroError {
    /// A setter rejected a value that breaks a structural constraint.
    #[error("invalid value '{value}' for '{key}': {reason}")]
    Validation {
        key: String,
        value: String,
        reason: String,
    },

    /// A property could not be converted to the type of its field.
    #[error("cannot convert '{value}' for '{key}'")]
    InvalidValue { key: String, value: String },

    #[error("configuration source error: {0}")]
    Config(#[from] config::ConfigError),
}

impl TaroError {
    pub fn validation(key: &str, value: &str, reason: impl Into<String>) -> Self {
        TaroError::Validation {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn invalid_value(key: &str, value: &str) -> Self {
        TaroError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    /// Whether this error is a configuration-authoring mistake rejected by a validator
    pub fn is_validation(&self) -> bool {
        matches!(self, TaroError::Validation { .. })
    }
}

pub type Result<T> = std::result::Result<T, TaroError>;
