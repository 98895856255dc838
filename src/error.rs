//! Error types for the hashskip crate

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while building a list from a configuration
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum ConfigError {
    /// Tower height out of range
    #[error("max_level must be in 1..={limit}, got {max_level}")]
    MaxLevel { max_level: usize, limit: usize },

    /// Zero-length prefix
    #[error("prefix_length must be at least 1")]
    PrefixLength,

    /// Malformed configuration document
    #[error("invalid configuration: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
