//! Error types for Reflex

use thiserror::Error;

/// The main error type for Reflex operations
#[derive(Debug, Error)]
pub enum ReflexError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),

    #[error("Invalid config: {field} {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for Reflex operations
pub type Result<T> = std::result::Result<T, ReflexError>;

impl ReflexError {
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ReflexError::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for ReflexError {
    fn from(err: toml::de::Error) -> Self {
        ReflexError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for ReflexError {
    fn from(err: toml::ser::Error) -> Self {
        ReflexError::TomlSerError(err.to_string())
    }
}
