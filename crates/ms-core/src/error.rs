//! Error types for ms-core

use thiserror::Error;

/// Core error type for Metastore
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Configuration file not found
    #[error("[E001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E002: Failed to parse configuration file
    #[error("[E002] Failed to parse config: {0}")]
    ConfigParseError(#[from] serde_yaml::Error),

    /// E003: Invalid configuration value
    #[error("[E003] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// E004: Dialect or driver name not recognized
    #[error("[E004] unsupported driver '{name}'")]
    UnsupportedDriver { name: String },

    /// E005: A row could not be decoded into a meta entry
    #[error("[E005] Failed to decode column '{column}': {reason}")]
    RowDecode { column: String, reason: String },

    /// E006: IO error with file path context
    #[error("[E006] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
