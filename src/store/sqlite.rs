//! SQLite adapter for the relational store.

use super::row::{Row, decode_text};
use super::{RelationalStore, StoreError, StoreResult};
use rusqlite::{Connection, OpenFlags, params_from_iter};
use std::path::Path;

/// Read-only SQLite connection.
///
/// The connection is closed when the store is dropped; use [`close`] to
/// observe close errors.
///
/// [`close`]: SqliteStore::close
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    // ===========================================
    // Connection Lifecycle
    // ===========================================

    /// Opens an existing database file read-only.
    ///
    /// Never creates the file. The header is read immediately so a missing
    /// or corrupt file fails here rather than on the first query.
    pub fn open(path: &Path) -> StoreResult<Self> {
        let open_error = |source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        };

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(open_error)?;
        conn.query_row("PRAGMA schema_version", [], |_| Ok(()))
            .map_err(open_error)?;

        tracing::info!(path = %path.display(), "opened notes database read-only");
        Ok(Self { conn })
    }

    /// Wraps an already-open connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Returns a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Closes the connection, reporting any error from SQLite.
    pub fn close(self) -> StoreResult<()> {
        self.conn.close().map_err(|(_, e)| StoreError::Query(e))
    }
}

impl RelationalStore for SqliteStore {
    fn query_rows(&self, sql: &str, params: &[&str]) -> StoreResult<Vec<Row>> {
        let mut stmt = self.conn.prepare(sql)?;
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

        let mut rows = stmt.query(params_from_iter(params.iter()))?;
        let mut results = Vec::new();
        while let Some(row) = rows.next()? {
            let mut values = Vec::with_capacity(columns.len());
            for (i, name) in columns.iter().enumerate() {
                let value = decode_text(name, row.get_ref(i)?)?;
                values.push((name.clone(), value));
            }
            results.push(Row::new(values));
        }
        Ok(results)
    }
}
