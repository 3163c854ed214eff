//! Point statements against the meta table

use chrono::{DateTime, Utc};
use ms_core::entry::columns;
use ms_core::{Dialect, MetaEntry, SqlValue};

use crate::ddl::render_create_table;
use crate::error::SqlResult;
use crate::quote::{check_table_name, quote_ident, Binder};

/// SQL text plus its bind parameters, in placeholder order
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

/// The meta table as rendered for one dialect
#[derive(Debug, Clone)]
pub struct MetaTable {
    dialect: Dialect,
    name: String,
    quoted_name: String,
}

impl MetaTable {
    /// Validate `name` and bind it to `dialect`
    pub fn new(dialect: Dialect, name: &str) -> SqlResult<Self> {
        check_table_name(name)?;
        Ok(Self {
            dialect,
            name: name.to_string(),
            quoted_name: quote_ident(dialect, name),
        })
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quoted_name(&self) -> &str {
        &self.quoted_name
    }

    /// Idempotent `CREATE TABLE IF NOT EXISTS` statement
    pub fn create_table(&self) -> String {
        render_create_table(self)
    }

    /// Select the entry for a triple; at most one row
    pub fn select_by_key(&self, object_type: &str, object_id: &str, key: &str) -> Statement {
        let mut binder = Binder::new(self.dialect);
        let where_clause = self.triple_filter(&mut binder, object_type, object_id, key);
        Statement {
            sql: format!(
                "SELECT {} FROM {} WHERE {} LIMIT 1",
                self.column_list(),
                self.quoted_name,
                where_clause
            ),
            params: binder.into_params(),
        }
    }

    /// Insert `entry` as a new row
    pub fn insert(&self, entry: &MetaEntry) -> Statement {
        let mut binder = Binder::new(self.dialect);
        let sql = self.insert_sql(&mut binder, entry);
        Statement {
            sql,
            params: binder.into_params(),
        }
    }

    /// Update only the value and `updated_at` of the row(s) for a triple
    pub fn update_value(
        &self,
        object_type: &str,
        object_id: &str,
        key: &str,
        value: &str,
        updated_at: DateTime<Utc>,
    ) -> Statement {
        let mut binder = Binder::new(self.dialect);
        let value_ph = binder.bind(value);
        let updated_ph = binder.bind(updated_at);
        let where_clause = self.triple_filter(&mut binder, object_type, object_id, key);
        Statement {
            sql: format!(
                "UPDATE {} SET {} = {}, {} = {} WHERE {}",
                self.quoted_name,
                self.q(columns::META_VALUE),
                value_ph,
                self.q(columns::UPDATED_AT),
                updated_ph,
                where_clause
            ),
            params: binder.into_params(),
        }
    }

    /// Insert `entry`, or when its triple already exists, overwrite only the
    /// existing row's value and `updated_at`.
    ///
    /// Relies on the triple's unique constraint from [`create_table`](Self::create_table).
    /// On MySQL a table without it turns this into a plain insert; see
    /// [`WriteMode::Upsert`](ms_core::WriteMode::Upsert).
    pub fn upsert(&self, entry: &MetaEntry) -> Statement {
        let mut binder = Binder::new(self.dialect);
        let insert = self.insert_sql(&mut binder, entry);
        let value = self.q(columns::META_VALUE);
        let updated = self.q(columns::UPDATED_AT);

        let conflict = match self.dialect {
            Dialect::MySql => format!(
                "ON DUPLICATE KEY UPDATE {value} = VALUES({value}), {updated} = VALUES({updated})"
            ),
            Dialect::Postgres | Dialect::Sqlite | Dialect::DuckDb => format!(
                "ON CONFLICT ({}, {}, {}) DO UPDATE SET {value} = excluded.{value}, {updated} = excluded.{updated}",
                self.q(columns::OBJECT_TYPE),
                self.q(columns::OBJECT_ID),
                self.q(columns::META_KEY),
            ),
        };

        Statement {
            sql: format!("{insert} {conflict}"),
            params: binder.into_params(),
        }
    }

    /// Delete the row(s) for a triple
    pub fn delete_by_key(&self, object_type: &str, object_id: &str, key: &str) -> Statement {
        let mut binder = Binder::new(self.dialect);
        let where_clause = self.triple_filter(&mut binder, object_type, object_id, key);
        Statement {
            sql: format!("DELETE FROM {} WHERE {}", self.quoted_name, where_clause),
            params: binder.into_params(),
        }
    }

    fn q(&self, ident: &str) -> String {
        quote_ident(self.dialect, ident)
    }

    fn column_list(&self) -> String {
        columns::ALL
            .iter()
            .map(|c| self.q(c))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn insert_sql(&self, binder: &mut Binder, entry: &MetaEntry) -> String {
        let placeholders: Vec<String> = entry
            .to_values()
            .into_iter()
            .map(|v| binder.bind(v))
            .collect();
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.quoted_name,
            self.column_list(),
            placeholders.join(", ")
        )
    }

    fn triple_filter(
        &self,
        binder: &mut Binder,
        object_type: &str,
        object_id: &str,
        key: &str,
    ) -> String {
        format!(
            "{} = {} AND {} = {} AND {} = {}",
            self.q(columns::OBJECT_TYPE),
            binder.bind(object_type),
            self.q(columns::OBJECT_ID),
            binder.bind(object_id),
            self.q(columns::META_KEY),
            binder.bind(key)
        )
    }
}

#[cfg(test)]
#[path = "statement_test.rs"]
mod tests;
