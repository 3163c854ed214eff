//! Database trait definition

use crate::error::DbResult;
use async_trait::async_trait;
use ms_core::{Row, SqlValue};

/// Connection the meta store executes its statements through
///
/// Implementations must be Send + Sync so one connection can back a store
/// shared between tasks.
#[async_trait]
pub trait Database: Send + Sync {
    /// Execute a statement that modifies data, returns affected rows
    async fn execute(&self, sql: &str, params: &[SqlValue]) -> DbResult<usize>;

    /// Execute multiple SQL statements without parameters
    async fn execute_batch(&self, sql: &str) -> DbResult<()>;

    /// Run a query and return its first row.
    ///
    /// An empty result is `Ok(None)`, never an error.
    async fn query_row(&self, sql: &str, params: &[SqlValue]) -> DbResult<Option<Row>>;

    /// Check if a table or view exists
    async fn relation_exists(&self, name: &str) -> DbResult<bool>;

    /// Database type identifier, also used to detect the SQL dialect
    fn db_type(&self) -> &'static str;
}
