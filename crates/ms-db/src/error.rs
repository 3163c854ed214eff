//! Error types for ms-db

use thiserror::Error;

/// Failures of the connection layer. "No row" is never an error here.
#[derive(Error, Debug)]
pub enum DbError {
    /// D001: the database could not be opened
    #[error("[D001] Database connection failed: {0}")]
    ConnectionError(String),

    /// D002: a statement failed to prepare, bind or run
    #[error("[D002] SQL execution failed: {0}")]
    ExecutionError(String),

    /// D003: the statement referenced a table that does not exist
    #[error("[D003] Table not found: {0}")]
    TableNotFound(String),

    /// D004: a previous holder of the connection lock panicked
    #[error("[D004] Database mutex poisoned: {0}")]
    MutexPoisoned(String),

    /// D005: a column value cannot be represented as text without loss
    #[error("[D005] Cannot decode column {index}: {reason}")]
    Decode { index: usize, reason: String },
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;

impl DbError {
    /// Classify a driver message, treating it as a missing table when
    /// `missing_table` matches.
    fn classify(msg: String, missing_table: impl Fn(&str) -> bool) -> Self {
        if missing_table(&msg) {
            DbError::TableNotFound(msg)
        } else {
            DbError::ExecutionError(msg)
        }
    }
}

impl From<duckdb::Error> for DbError {
    fn from(err: duckdb::Error) -> Self {
        // duckdb::Error has no structured catalog variants.
        DbError::classify(err.to_string(), |msg| {
            msg.contains("Table with name")
                || msg.contains("Table or view with name")
                || (msg.contains("Catalog Error") && msg.contains("Table") && msg.contains("not found"))
        })
    }
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for DbError {
    fn from(err: rusqlite::Error) -> Self {
        DbError::classify(err.to_string(), |msg| msg.contains("no such table"))
    }
}
