//! ms-sql - SQL generation layer for Metastore
//!
//! This crate renders the meta table's `CREATE TABLE IF NOT EXISTS` statement
//! and its point statements (select, insert, update, upsert, delete) for each
//! supported dialect, and validates SQL text with sqlparser-rs.

pub mod ddl;
pub mod error;
pub mod quote;
pub mod statement;
pub mod validator;

pub use ddl::{create_table_sql, create_table_sql_for_driver};
pub use error::{SqlError, SqlResult};
pub use quote::quote_ident;
pub use statement::{MetaTable, Statement};
pub use validator::{parse_sql, validate_sql};
