//! The meta entry record: one row of the meta table

use crate::error::{CoreError, CoreResult};
use crate::value::SqlValue;
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// Column names of the meta table, in SELECT order
pub mod columns {
    pub const ID: &str = "id";
    pub const OBJECT_TYPE: &str = "object_type";
    pub const OBJECT_ID: &str = "object_id";
    /// `key` is reserved in MySQL, hence the prefix
    pub const META_KEY: &str = "meta_key";
    pub const META_VALUE: &str = "meta_value";
    pub const CREATED_AT: &str = "created_at";
    pub const UPDATED_AT: &str = "updated_at";
    pub const DELETED_AT: &str = "deleted_at";

    /// Every column, in the order rows are read and written
    pub const ALL: [&str; 8] = [
        ID,
        OBJECT_TYPE,
        OBJECT_ID,
        META_KEY,
        META_VALUE,
        CREATED_AT,
        UPDATED_AT,
        DELETED_AT,
    ];
}

/// Maximum length of a generated entry id
pub const ID_MAX_LEN: usize = 40;

/// A key/value pair attached to an `(object_type, object_id)` pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaEntry {
    pub id: String,
    pub object_type: String,
    pub object_id: String,
    pub key: String,
    pub value: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Always NULL; removal is a hard delete
    pub deleted_at: Option<DateTime<Utc>>,
}

impl MetaEntry {
    /// Build a new, not yet persisted entry with a fresh id.
    ///
    /// `created_at` and `updated_at` are identical and truncated to
    /// microseconds so they survive a round trip through every backend.
    pub fn new(
        object_type: impl Into<String>,
        object_id: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let now = now_micros();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            object_type: object_type.into(),
            object_id: object_id.into(),
            key: key.into(),
            value: value.into(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Bind values for every column, in [`columns::ALL`] order
    pub fn to_values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::from(self.id.as_str()),
            SqlValue::from(self.object_type.as_str()),
            SqlValue::from(self.object_id.as_str()),
            SqlValue::from(self.key.as_str()),
            SqlValue::from(self.value.as_str()),
            SqlValue::from(self.created_at),
            SqlValue::from(self.updated_at),
            SqlValue::from(self.deleted_at),
        ]
    }

    /// Decode a row selected with [`columns::ALL`]
    pub fn from_row(row: &[SqlValue]) -> CoreResult<Self> {
        if row.len() != columns::ALL.len() {
            return Err(CoreError::RowDecode {
                column: "*".to_string(),
                reason: format!(
                    "expected {} columns, found {}",
                    columns::ALL.len(),
                    row.len()
                ),
            });
        }

        Ok(Self {
            id: text_at(row, 0)?,
            object_type: text_at(row, 1)?,
            object_id: text_at(row, 2)?,
            key: text_at(row, 3)?,
            value: text_at(row, 4)?,
            created_at: timestamp_at(row, 5)?,
            updated_at: timestamp_at(row, 6)?,
            deleted_at: match &row[7] {
                SqlValue::Null => None,
                _ => Some(timestamp_at(row, 7)?),
            },
        })
    }
}

/// Current UTC time truncated to microseconds
pub fn now_micros() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

fn text_at(row: &[SqlValue], idx: usize) -> CoreResult<String> {
    row[idx]
        .as_text()
        .map(str::to_string)
        .ok_or_else(|| CoreError::RowDecode {
            column: columns::ALL[idx].to_string(),
            reason: format!("expected text, found {:?}", row[idx]),
        })
}

fn timestamp_at(row: &[SqlValue], idx: usize) -> CoreResult<DateTime<Utc>> {
    row[idx].to_timestamp().ok_or_else(|| CoreError::RowDecode {
        column: columns::ALL[idx].to_string(),
        reason: format!("expected timestamp, found {:?}", row[idx]),
    })
}

#[cfg(test)]
#[path = "entry_test.rs"]
mod tests;
