//! Error types for the meta store.

use ms_core::CoreError;
use ms_db::DbError;
use ms_sql::SqlError;
use thiserror::Error;

/// Meta store errors.
///
/// A missing row is never an error: lookups report it as `None` or the
/// caller's default, and removing an absent key succeeds.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No table name was configured (M001).
    #[error("[M001] Meta store: table name is required")]
    MissingTableName,

    /// No database connection was configured (M002).
    #[error("[M002] Meta store: database connection is required")]
    MissingDatabase,

    /// SQL could not be generated, e.g. an unsupported driver.
    #[error(transparent)]
    Sql(#[from] SqlError),

    /// The backing connection failed to run a statement.
    #[error(transparent)]
    Db(#[from] DbError),

    /// A value could not be encoded as JSON (M003).
    #[error("[M003] Meta store: JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// A stored row could not be decoded (M004).
    #[error("[M004] Meta store: {0}")]
    Decode(#[from] CoreError),
}

/// Result type alias for [`StoreError`].
pub type StoreResult<T> = Result<T, StoreError>;
