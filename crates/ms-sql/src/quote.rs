//! Identifier quoting and positional placeholders per dialect

use ms_core::{Dialect, SqlValue};

use crate::error::{SqlError, SqlResult};

/// Quote an identifier for `dialect`, doubling any embedded quote character
pub fn quote_ident(dialect: Dialect, ident: &str) -> String {
    match dialect {
        Dialect::MySql => format!("`{}`", ident.replace('`', "``")),
        Dialect::Postgres | Dialect::Sqlite | Dialect::DuckDb => {
            format!("\"{}\"", ident.replace('"', "\"\""))
        }
    }
}

/// Check that a table name can be quoted safely
pub(crate) fn check_table_name(name: &str) -> SqlResult<()> {
    if name.trim().is_empty() {
        return Err(SqlError::InvalidIdentifier {
            name: name.to_string(),
            reason: "table name cannot be empty".to_string(),
        });
    }
    if name.contains('\0') {
        return Err(SqlError::InvalidIdentifier {
            name: name.escape_default().to_string(),
            reason: "table name cannot contain NUL characters".to_string(),
        });
    }
    Ok(())
}

/// Collects bind parameters and hands out the matching placeholder text.
///
/// Postgres numbers its placeholders (`$1`, `$2`, ...); every other dialect
/// uses `?`. Parameters must be bound in the order they appear in the SQL.
pub(crate) struct Binder {
    dialect: Dialect,
    params: Vec<SqlValue>,
}

impl Binder {
    pub(crate) fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            params: Vec::new(),
        }
    }

    pub(crate) fn bind(&mut self, value: impl Into<SqlValue>) -> String {
        self.params.push(value.into());
        match self.dialect {
            Dialect::Postgres => format!("${}", self.params.len()),
            Dialect::MySql | Dialect::Sqlite | Dialect::DuckDb => "?".to_string(),
        }
    }

    pub(crate) fn into_params(self) -> Vec<SqlValue> {
        self.params
    }
}

#[cfg(test)]
#[path = "quote_test.rs"]
mod tests;
