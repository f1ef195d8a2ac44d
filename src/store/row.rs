//! Typed decoding of result rows.

use super::{StoreError, StoreResult};
use rusqlite::types::ValueRef;

/// A result row with every column decoded to text, in select-list order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    columns: Vec<(String, String)>,
}

impl Row {
    /// Creates a row from `(column, value)` pairs.
    pub fn new(columns: Vec<(String, String)>) -> Self {
        Self { columns }
    }

    /// Returns the value of the named column.
    pub fn get(&self, column: &str) -> StoreResult<&str> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
            .ok_or_else(|| StoreError::MissingColumn {
                column: column.to_string(),
            })
    }

    /// Consumes a one-column row and returns its value, whatever the column is called.
    pub fn into_single(self) -> StoreResult<String> {
        let found = self.columns.len();
        let mut columns = self.columns.into_iter();
        match (columns.next(), columns.next()) {
            (Some((_, value)), None) => Ok(value),
            _ => Err(StoreError::UnexpectedColumnCount { expected: 1, found }),
        }
    }
}

/// Decodes a raw column value as UTF-8 text.
///
/// Bear stores text columns as TEXT, and some drivers hand those back as
/// blobs, so both are accepted. NULL and numeric values are rejected.
pub(crate) fn decode_text(column: &str, value: ValueRef<'_>) -> StoreResult<String> {
    let bytes = match value {
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => bytes,
        ValueRef::Null => return Err(unexpected(column, "NULL")),
        ValueRef::Integer(_) => return Err(unexpected(column, "INTEGER")),
        ValueRef::Real(_) => return Err(unexpected(column, "REAL")),
    };

    String::from_utf8(bytes.to_vec()).map_err(|source| StoreError::InvalidUtf8 {
        column: column.to_string(),
        source,
    })
}

fn unexpected(column: &str, found: &'static str) -> StoreError {
    StoreError::UnexpectedType {
        column: column.to_string(),
        found,
    }
}
