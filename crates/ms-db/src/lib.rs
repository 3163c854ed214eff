//! ms-db - Database abstraction layer for Metastore
//!
//! This crate provides the `Database` trait the store executes through, and
//! embedded implementations for DuckDB and (with the `sqlite` feature) SQLite.

pub mod duckdb;
pub mod error;
#[cfg(feature = "sqlite")]
pub mod sqlite;
pub mod traits;

pub use duckdb::DuckDbBackend;
pub use error::{DbError, DbResult};
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteBackend;
pub use traits::Database;
