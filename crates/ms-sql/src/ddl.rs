//! `CREATE TABLE IF NOT EXISTS` generation for the meta table.
//!
//! The statement is purely additive, so it is safe to run on every startup.

use ms_core::entry::columns;
use ms_core::Dialect;

use crate::error::SqlResult;
use crate::quote::quote_ident;
use crate::statement::MetaTable;

/// Column types for one dialect
struct ColumnTypes {
    id: &'static str,
    object_type: &'static str,
    object_id: &'static str,
    meta_key: &'static str,
    meta_value: &'static str,
    timestamp: &'static str,
    /// Suffix marking a column nullable; empty where nullable is the default
    nullable: &'static str,
}

fn column_types(dialect: Dialect) -> ColumnTypes {
    match dialect {
        Dialect::MySql => ColumnTypes {
            id: "VARCHAR(40)",
            object_type: "VARCHAR(100)",
            object_id: "VARCHAR(100)",
            meta_key: "VARCHAR(255)",
            meta_value: "LONGTEXT",
            timestamp: "DATETIME(6)",
            nullable: " NULL",
        },
        Dialect::Postgres => ColumnTypes {
            id: "VARCHAR(40)",
            object_type: "VARCHAR(100)",
            object_id: "VARCHAR(100)",
            meta_key: "VARCHAR(255)",
            meta_value: "TEXT",
            timestamp: "TIMESTAMPTZ",
            nullable: "",
        },
        Dialect::Sqlite => ColumnTypes {
            id: "VARCHAR(40)",
            object_type: "VARCHAR(100)",
            object_id: "VARCHAR(100)",
            meta_key: "VARCHAR(255)",
            meta_value: "TEXT",
            timestamp: "DATETIME",
            nullable: "",
        },
        Dialect::DuckDb => ColumnTypes {
            id: "VARCHAR(40)",
            object_type: "VARCHAR(100)",
            object_id: "VARCHAR(100)",
            meta_key: "VARCHAR(255)",
            meta_value: "TEXT",
            timestamp: "TIMESTAMP",
            nullable: "",
        },
    }
}

/// Render the DDL for an already validated table
pub(crate) fn render_create_table(table: &MetaTable) -> String {
    let dialect = table.dialect();
    let types = column_types(dialect);
    let q = |ident: &str| quote_ident(dialect, ident);

    let definitions = [
        format!("{} {} NOT NULL PRIMARY KEY", q(columns::ID), types.id),
        format!("{} {} NOT NULL", q(columns::OBJECT_TYPE), types.object_type),
        format!("{} {} NOT NULL", q(columns::OBJECT_ID), types.object_id),
        format!("{} {} NOT NULL", q(columns::META_KEY), types.meta_key),
        format!("{} {} NOT NULL", q(columns::META_VALUE), types.meta_value),
        format!("{} {} NOT NULL", q(columns::CREATED_AT), types.timestamp),
        format!("{} {} NOT NULL", q(columns::UPDATED_AT), types.timestamp),
        format!(
            "{} {}{}",
            q(columns::DELETED_AT),
            types.timestamp,
            types.nullable
        ),
        format!(
            "UNIQUE ({}, {}, {})",
            q(columns::OBJECT_TYPE),
            q(columns::OBJECT_ID),
            q(columns::META_KEY)
        ),
    ];

    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
        table.quoted_name(),
        definitions.join(",\n    ")
    )
}

/// `CREATE TABLE IF NOT EXISTS` for `table_name` in `dialect`
pub fn create_table_sql(dialect: Dialect, table_name: &str) -> SqlResult<String> {
    Ok(MetaTable::new(dialect, table_name)?.create_table())
}

/// As [`create_table_sql`], resolving the dialect from a driver name.
///
/// Unrecognized names yield [`SqlError::UnsupportedDriver`](crate::SqlError::UnsupportedDriver)
/// instead of malformed SQL.
pub fn create_table_sql_for_driver(driver: &str, table_name: &str) -> SqlResult<String> {
    let dialect: Dialect = driver.parse()?;
    create_table_sql(dialect, table_name)
}

#[cfg(test)]
#[path = "ddl_test.rs"]
mod tests;
