//! Error types and error handling for the textprep core.
//!
//! This module defines the error types used throughout the
//! library. The core itself only fails on rejected preconditions;
//! transport-specific error mapping belongs to the embedding host.

use thiserror::Error;

/// Result type alias for textprep operations
pub type Result<T> = std::result::Result<T, TextPrepError>;

/// Main error type for the textprep core
#[derive(Error, Debug)]
pub enum TextPrepError {
    #[error("Invalid chunking parameters: {0}")]
    InvalidChunking(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl TextPrepError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this error is a rejected precondition (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            TextPrepError::InvalidChunking(_) | TextPrepError::ConfigError(_)
        )
    }
}
