//! ms-core - Core library for Metastore
//!
//! This crate provides the types shared by every Metastore component: the
//! supported SQL dialects, bind values and rows, the `MetaEntry` record, and
//! `metastore.yml` configuration parsing.

pub mod config;
pub mod dialect;
pub mod entry;
pub mod error;
pub mod value;

pub use config::{Config, DatabaseConfig, DbType, WriteMode};
pub use dialect::Dialect;
pub use entry::MetaEntry;
pub use error::{CoreError, CoreResult};
pub use value::{Row, SqlValue};
