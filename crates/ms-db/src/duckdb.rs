//! DuckDB database backend implementation

use crate::error::{DbError, DbResult};
use crate::traits::Database;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use duckdb::types::Value;
use duckdb::{params_from_iter, Connection};
use ms_core::{Row, SqlValue};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// DuckDB database backend
pub struct DuckDbBackend {
    conn: Mutex<Connection>,
}

impl DuckDbBackend {
    /// Create a new in-memory DuckDB connection
    pub fn in_memory() -> DbResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create a new DuckDB connection from a file path
    pub fn from_path(path: &Path) -> DbResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| DbError::ConnectionError(format!("{e}: {}", path.display())))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create from path string (handles :memory: special case)
    pub fn new(path: &str) -> DbResult<Self> {
        if path == ":memory:" {
            Self::in_memory()
        } else {
            Self::from_path(Path::new(path))
        }
    }

    fn lock(&self) -> DbResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| DbError::MutexPoisoned(e.to_string()))
    }

    /// Execute SQL synchronously
    fn execute_sync(&self, sql: &str, params: &[SqlValue]) -> DbResult<usize> {
        let conn = self.lock()?;
        Ok(conn.execute(sql, params_from_iter(bind_values(params)))?)
    }

    /// Execute batch SQL synchronously
    fn execute_batch_sync(&self, sql: &str) -> DbResult<()> {
        let conn = self.lock()?;
        Ok(conn.execute_batch(sql)?)
    }

    /// Fetch the first row synchronously
    fn query_row_sync(&self, sql: &str, params: &[SqlValue]) -> DbResult<Option<Row>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values(params)))?;
        let Some(row) = rows.next()? else {
            return Ok(None);
        };
        let column_count = row.as_ref().column_count();
        Ok(Some(
            (0..column_count)
                .map(|i| get_column_value(row, i))
                .collect(),
        ))
    }

    /// Check if relation exists synchronously.
    ///
    /// `name` is a single identifier, matching how the store quotes it: a
    /// dot is part of the name, not a schema separator.
    fn relation_exists_sync(&self, name: &str) -> DbResult<bool> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM information_schema.tables \
             WHERE table_schema = current_schema() AND table_name = ?",
            duckdb::params![name],
            |row| row.get(0),
        )?;

        Ok(count > 0)
    }
}

fn bind_values(params: &[SqlValue]) -> Vec<Value> {
    params
        .iter()
        .map(|p| p.to_bind_text().map_or(Value::Null, Value::Text))
        .collect()
}

/// Read a column as a [`SqlValue`], trying text before timestamps.
///
/// `Option<String>` yields `Ok(None)` for NULL of any column type and an
/// error for non-text columns, so the order matters.
fn get_column_value(row: &duckdb::Row<'_>, idx: usize) -> SqlValue {
    if let Ok(text) = row.get::<_, Option<String>>(idx) {
        return text.map_or(SqlValue::Null, SqlValue::Text);
    }
    if let Ok(Some(ts)) = row.get::<_, Option<NaiveDateTime>>(idx) {
        return SqlValue::Timestamp(ts.and_utc());
    }
    if let Ok(Some(n)) = row.get::<_, Option<i64>>(idx) {
        return SqlValue::Text(n.to_string());
    }
    SqlValue::Null
}

#[async_trait]
impl Database for DuckDbBackend {
    async fn execute(&self, sql: &str, params: &[SqlValue]) -> DbResult<usize> {
        self.execute_sync(sql, params)
    }

    async fn execute_batch(&self, sql: &str) -> DbResult<()> {
        self.execute_batch_sync(sql)
    }

    async fn query_row(&self, sql: &str, params: &[SqlValue]) -> DbResult<Option<Row>> {
        self.query_row_sync(sql, params)
    }

    async fn relation_exists(&self, name: &str) -> DbResult<bool> {
        self.relation_exists_sync(name)
    }

    fn db_type(&self) -> &'static str {
        "duckdb"
    }
}

#[cfg(test)]
#[path = "duckdb_test.rs"]
mod tests;
