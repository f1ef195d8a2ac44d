//! Read-only access to the embedded relational store.

mod row;
mod sqlite;


use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

pub use row::Row;
pub use sqlite::SqliteStore;

// ===========================================
// StoreError Type
// ===========================================

/// Errors raised while opening or querying the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database file could not be opened.
    #[error("failed to open database at {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// The engine rejected or failed to run a query.
    #[error("query failed: {0}")]
    Query(#[from] rusqlite::Error),

    /// A column expected to hold text held another storage class.
    #[error("column '{column}' holds {found}, expected text")]
    UnexpectedType { column: String, found: &'static str },

    /// A text column did not hold valid UTF-8.
    #[error("column '{column}' is not valid UTF-8: {source}")]
    InvalidUtf8 {
        column: String,
        #[source]
        source: FromUtf8Error,
    },

    /// A row did not contain a column the caller asked for.
    #[error("column '{column}' missing from result row")]
    MissingColumn { column: String },

    /// A row had a different number of columns than the query declares.
    #[error("expected {expected} column(s) per row, found {found}")]
    UnexpectedColumnCount { expected: usize, found: usize },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// ===========================================
// RelationalStore Trait
// ===========================================

/// Executes read-only SQL and returns rows decoded as text.
///
/// Parameters are bound positionally (`?1`, `?2`, ...) and never spliced
/// into the SQL text.
pub trait RelationalStore {
    /// Runs `sql` and returns every row as named text columns.
    fn query_rows(&self, sql: &str, params: &[&str]) -> StoreResult<Vec<Row>>;

    /// Runs a single-column query and returns that column's values.
    fn query_strings(&self, sql: &str, params: &[&str]) -> StoreResult<Vec<String>> {
        self.query_rows(sql, params)?
            .into_iter()
            .map(Row::into_single)
            .collect()
    }
}

impl<S: RelationalStore + ?Sized> RelationalStore for &S {
    fn query_rows(&self, sql: &str, params: &[&str]) -> StoreResult<Vec<Row>> {
        (**self).query_rows(sql, params)
    }
}
