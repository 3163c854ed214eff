//! Error types for ms-sql

use ms_core::CoreError;
use thiserror::Error;

/// SQL generation and validation errors
#[derive(Error, Debug)]
pub enum SqlError {
    /// SQL parse error (S001)
    #[error("[S001] SQL parse error: {0}")]
    ParseError(String),

    /// Unsupported driver or dialect name (S002)
    #[error("[S002] unsupported driver '{0}'")]
    UnsupportedDriver(String),

    /// Identifier cannot be rendered (S003)
    #[error("[S003] Invalid identifier '{name}': {reason}")]
    InvalidIdentifier { name: String, reason: String },

    /// Expected exactly one statement (S004)
    #[error("[S004] Expected a single SQL statement, found {0}")]
    StatementCount(usize),
}

/// Result type alias for SqlError
pub type SqlResult<T> = Result<T, SqlError>;

impl From<CoreError> for SqlError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnsupportedDriver { name } => SqlError::UnsupportedDriver(name),
            other => SqlError::ParseError(other.to_string()),
        }
    }
}
