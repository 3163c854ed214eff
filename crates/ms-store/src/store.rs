//! [`MetaStore`] implementation over a single meta table.

use std::sync::Arc;

use ms_core::entry::now_micros;
use ms_core::{Dialect, MetaEntry, WriteMode};
use ms_db::Database;
use ms_sql::{MetaTable, SqlError, Statement};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{StoreError, StoreResult};
use crate::options::StoreOptions;

/// Key/value metadata attached to `(object_type, object_id)` pairs.
///
/// Object type, object id, and key are taken verbatim; empty strings are
/// valid keys like any other.
pub struct MetaStore {
    table: MetaTable,
    db: Arc<dyn Database>,
    automigrate_enabled: bool,
    debug_enabled: bool,
    write_mode: WriteMode,
}

/// Result of [`MetaStore::get_json`].
///
/// When the stored text is not valid JSON for `T`, `value` holds the caller's
/// default and `decode_error` says why.
#[derive(Debug)]
pub struct JsonRead<T> {
    pub value: T,
    pub decode_error: Option<serde_json::Error>,
}

impl<T> JsonRead<T> {
    pub fn is_decoded(&self) -> bool {
        self.decode_error.is_none()
    }

    pub fn into_value(self) -> T {
        self.value
    }

    /// The decoded value, or the decode error (dropping the default).
    pub fn into_result(self) -> Result<T, serde_json::Error> {
        match self.decode_error {
            None => Ok(self.value),
            Some(err) => Err(err),
        }
    }
}

impl MetaStore {
    /// Open a store, creating the table first when automigrate is enabled.
    pub async fn new(options: StoreOptions) -> StoreResult<Self> {
        let StoreOptions {
            table_name,
            db,
            dialect,
            automigrate,
            debug,
            write_mode,
        } = options;

        if table_name.trim().is_empty() {
            return Err(StoreError::MissingTableName);
        }
        let db = db.ok_or(StoreError::MissingDatabase)?;
        let dialect = match dialect {
            Some(dialect) => dialect,
            None => db.db_type().parse::<Dialect>().map_err(SqlError::from)?,
        };

        let store = Self {
            table: MetaTable::new(dialect, &table_name)?,
            db,
            automigrate_enabled: automigrate,
            debug_enabled: debug,
            write_mode,
        };

        if store.automigrate_enabled {
            store.auto_migrate().await?;
        }

        Ok(store)
    }

    /// Create the meta table if it does not exist. Safe to call repeatedly.
    pub async fn auto_migrate(&self) -> StoreResult<()> {
        let sql = self.sql_create_table();
        self.log_sql(&sql);
        self.db.execute_batch(&sql).await?;
        log::debug!("Meta table '{}' is ready", self.table.name());
        Ok(())
    }

    /// The `CREATE TABLE IF NOT EXISTS` statement for this store's table.
    pub fn sql_create_table(&self) -> String {
        self.table.create_table()
    }

    /// Look up the entry for a triple.
    ///
    /// `Ok(None)` means no such entry; errors are reserved for failures of
    /// the query itself.
    pub async fn find_by_key(
        &self,
        object_type: &str,
        object_id: &str,
        key: &str,
    ) -> StoreResult<Option<MetaEntry>> {
        let stmt = self.table.select_by_key(object_type, object_id, key);
        self.log_statement(&stmt);
        let row = self.db.query_row(&stmt.sql, &stmt.params).await?;
        Ok(row.map(|r| MetaEntry::from_row(&r)).transpose()?)
    }

    /// The stored value for a triple, or `default` when there is none.
    pub async fn get(
        &self,
        object_type: &str,
        object_id: &str,
        key: &str,
        default: &str,
    ) -> StoreResult<String> {
        Ok(self
            .find_by_key(object_type, object_id, key)
            .await?
            .map_or_else(|| default.to_string(), |entry| entry.value))
    }

    /// The stored value decoded as JSON, or `default` when there is none.
    ///
    /// A value that fails to decode is not a store error: the default comes
    /// back together with the decode error.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        object_type: &str,
        object_id: &str,
        key: &str,
        default: T,
    ) -> StoreResult<JsonRead<T>> {
        let Some(entry) = self.find_by_key(object_type, object_id, key).await? else {
            return Ok(JsonRead {
                value: default,
                decode_error: None,
            });
        };

        Ok(match serde_json::from_str(&entry.value) {
            Ok(value) => JsonRead {
                value,
                decode_error: None,
            },
            Err(err) => JsonRead {
                value: default,
                decode_error: Some(err),
            },
        })
    }

    /// Store `value` for a triple, creating the entry or overwriting its
    /// value and `updated_at`.
    pub async fn set(
        &self,
        object_type: &str,
        object_id: &str,
        key: &str,
        value: &str,
    ) -> StoreResult<()> {
        match self.write_mode {
            WriteMode::Upsert => {
                let entry = MetaEntry::new(object_type, object_id, key, value);
                self.execute(&self.table.upsert(&entry)).await?;
            }
            WriteMode::FindThenWrite => {
                // Not atomic: see WriteMode::FindThenWrite.
                let existing = self.find_by_key(object_type, object_id, key).await?;
                let stmt = match existing {
                    None => self
                        .table
                        .insert(&MetaEntry::new(object_type, object_id, key, value)),
                    Some(_) => {
                        self.table
                            .update_value(object_type, object_id, key, value, now_micros())
                    }
                };
                self.execute(&stmt).await?;
            }
        }
        Ok(())
    }

    /// Encode `value` as JSON and [`set`](Self::set) it.
    pub async fn set_json<T: Serialize + ?Sized>(
        &self,
        object_type: &str,
        object_id: &str,
        key: &str,
        value: &T,
    ) -> StoreResult<()> {
        let json = serde_json::to_string(value)?;
        self.set(object_type, object_id, key, &json).await
    }

    /// Delete the entry for a triple. Removing an absent entry succeeds.
    pub async fn remove(&self, object_type: &str, object_id: &str, key: &str) -> StoreResult<()> {
        let stmt = self.table.delete_by_key(object_type, object_id, key);
        let removed = self.execute(&stmt).await?;
        if self.debug_enabled {
            log::debug!("Removed {removed} row(s) for {object_type}/{object_id}/{key}");
        }
        Ok(())
    }

    /// Toggle statement logging for this store.
    pub fn enable_debug(&mut self, debug: bool) {
        self.debug_enabled = debug;
    }

    pub fn table_name(&self) -> &str {
        self.table.name()
    }

    pub fn dialect(&self) -> Dialect {
        self.table.dialect()
    }

    pub fn write_mode(&self) -> WriteMode {
        self.write_mode
    }

    pub fn is_automigrate_enabled(&self) -> bool {
        self.automigrate_enabled
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.debug_enabled
    }

    /// The connection this store executes through.
    pub fn db(&self) -> &Arc<dyn Database> {
        &self.db
    }

    async fn execute(&self, stmt: &Statement) -> StoreResult<usize> {
        self.log_statement(stmt);
        Ok(self.db.execute(&stmt.sql, &stmt.params).await?)
    }

    fn log_statement(&self, stmt: &Statement) {
        if self.debug_enabled {
            let params: Vec<String> = stmt.params.iter().map(ToString::to_string).collect();
            log::debug!("{} -- params: [{}]", stmt.sql, params.join(", "));
            self.check_sql(&stmt.sql);
        }
    }

    fn log_sql(&self, sql: &str) {
        if self.debug_enabled {
            log::debug!("{sql}");
            self.check_sql(sql);
        }
    }

    /// Debug mode only: warn when generated SQL is not one statement the
    /// store's dialect parses. The statement still runs.
    fn check_sql(&self, sql: &str) {
        if let Err(err) = ms_sql::validate_sql(self.dialect(), sql) {
            log::warn!("Generated SQL does not parse as {}: {err}", self.dialect());
        }
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
