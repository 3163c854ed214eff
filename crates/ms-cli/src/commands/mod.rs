//! CLI command implementations

pub(crate) mod ddl;
pub(crate) mod find;
pub(crate) mod get;
pub(crate) mod migrate;
pub(crate) mod rm;
pub(crate) mod set;
