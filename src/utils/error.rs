//! Error handling
//!
//! Only the configuration surface is fallible. Permission queries have
//! exactly one negative-but-valid outcome (`false`) and never return an
//! error: an unregistered role is a guarded lookup, not a failure.

use thiserror::Error;

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, AuthzError>;

/// Main error type for the crate
#[derive(Error, Debug)]
pub enum AuthzError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// YAML errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
