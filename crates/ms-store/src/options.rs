//! Constructor configuration for [`MetaStore`](crate::MetaStore).

use ms_core::{Dialect, WriteMode};
use ms_db::Database;
use std::fmt;
use std::sync::Arc;

/// Options accepted by [`MetaStore::new`](crate::MetaStore::new).
///
/// `table_name` and `db` are required; everything else has a default.
#[derive(Clone, Default)]
pub struct StoreOptions {
    pub table_name: String,
    pub db: Option<Arc<dyn Database>>,
    /// Detected from [`Database::db_type`] when `None`.
    pub dialect: Option<Dialect>,
    pub automigrate: bool,
    pub debug: bool,
    pub write_mode: WriteMode,
}

impl StoreOptions {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            ..Self::default()
        }
    }

    pub fn with_db(mut self, db: Arc<dyn Database>) -> Self {
        self.db = Some(db);
        self
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = Some(dialect);
        self
    }

    /// Run the idempotent `CREATE TABLE IF NOT EXISTS` when the store opens.
    pub fn with_automigrate(mut self, automigrate: bool) -> Self {
        self.automigrate = automigrate;
        self
    }

    /// Log every generated statement at debug level.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }
}

impl fmt::Debug for StoreOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreOptions")
            .field("table_name", &self.table_name)
            .field("db", &self.db.as_ref().map(|db| db.db_type()))
            .field("dialect", &self.dialect)
            .field("automigrate", &self.automigrate)
            .field("debug", &self.debug)
            .field("write_mode", &self.write_mode)
            .finish()
    }
}
