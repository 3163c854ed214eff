//! Meta store for Metastore.
//!
//! [`MetaStore`] attaches string (or JSON-encoded) values to any
//! `(object_type, object_id)` pair by key, in a single table it can create on
//! startup. Every operation is an independent round trip through a
//! caller-supplied [`Database`](ms_db::Database); the store keeps no
//! in-process state beyond its configuration.

pub mod error;
pub mod options;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use ms_core::{Dialect, MetaEntry, WriteMode};
pub use options::StoreOptions;
pub use store::{JsonRead, MetaStore};
