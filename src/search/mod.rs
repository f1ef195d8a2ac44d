//! Search and lookup over the Bear notes database.

mod queries;


use crate::domain::{Note, NoteList};
use crate::store::{RelationalStore, Row, SqliteStore, StoreError, StoreResult};
use queries::{ID_COLUMN, Query, TITLE_COLUMN};
use std::path::Path;
use thiserror::Error;

pub use queries::DEFAULT_LIMIT;

// ===========================================
// SearchError Type
// ===========================================

/// Errors returned by [`BearDb`] operations.
#[derive(Debug, Error)]
pub enum SearchError {
    /// No visible note has the requested identifier.
    #[error("no notes for ID '{id}'")]
    NotFound { id: String },

    /// The store failed to open, run a query, or decode a row.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for search operations.
pub type SearchResult<T> = Result<T, SearchError>;

// ===========================================
// BearDb
// ===========================================

/// Read-only query layer over a Bear database.
///
/// Every underlying query is capped at [`limit`](BearDb::limit) rows. Multi
/// word searches run a second, word-gap query and merge its results after
/// the exact-phrase results, so a search may return up to twice the limit.
pub struct BearDb<S = SqliteStore> {
    store: S,
    limit: usize,
}

impl BearDb<SqliteStore> {
    /// Opens the database at `path` read-only with the default limit.
    pub fn open(path: &Path) -> SearchResult<Self> {
        let store = SqliteStore::open(path)?;
        Ok(Self::new(store))
    }

    /// Closes the underlying connection.
    pub fn close(self) -> SearchResult<()> {
        Ok(self.store.close()?)
    }
}

impl<S: RelationalStore> BearDb<S> {
    /// Wraps a store with the default limit.
    pub fn new(store: S) -> Self {
        Self {
            store,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Sets the per-query row cap.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Returns the per-query row cap.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns tag names containing `substring`, most recently modified first.
    pub fn search_tags(&self, substring: &str) -> SearchResult<Vec<String>> {
        Ok(self.query_strings(&queries::TAGS, &[substring])?)
    }

    /// Returns the most recently modified notes.
    pub fn recent(&self) -> SearchResult<NoteList> {
        Ok(self.query_notes(&queries::RECENT, &[])?)
    }

    /// Returns the title of the note with identifier `id`.
    ///
    /// If several rows share the identifier, the most recently modified wins.
    pub fn title(&self, id: &str) -> SearchResult<String> {
        self.query_strings(&queries::TITLE_BY_ID, &[id])?
            .into_iter()
            .next()
            .ok_or_else(|| SearchError::NotFound { id: id.to_string() })
    }

    /// Searches note titles, matching the phrase exactly or with word gaps.
    pub fn search_notes_by_title(&self, title: &str) -> SearchResult<NoteList> {
        Ok(self.gap_query(&queries::NOTES_BY_TITLE, title)?)
    }

    /// Searches note bodies, matching the phrase exactly or with word gaps.
    pub fn search_notes_by_text(&self, text: &str) -> SearchResult<NoteList> {
        Ok(self.gap_query(&queries::NOTES_BY_TEXT, text)?)
    }

    /// Searches titles, then bodies, listing title matches first.
    ///
    /// Any failure aborts the search; no partial result is returned.
    pub fn search_notes(&self, text: &str) -> SearchResult<NoteList> {
        let mut notes = self.search_notes_by_title(text)?;
        let text_notes = self.search_notes_by_text(text)?;
        notes.append_new_from(text_notes);
        Ok(notes)
    }

    // ===========================================
    // Query Helpers
    // ===========================================

    fn query_strings(&self, query: &Query, params: &[&str]) -> StoreResult<Vec<String>> {
        let values = self
            .store
            .query_strings(&query.limited(self.limit), params)?;
        tracing::debug!(query = query.name, ?params, rows = values.len(), "query complete");
        Ok(values)
    }

    fn query_notes(&self, query: &Query, params: &[&str]) -> StoreResult<NoteList> {
        let rows = self.store.query_rows(&query.limited(self.limit), params)?;
        tracing::debug!(query = query.name, ?params, rows = rows.len(), "query complete");
        rows.iter().map(to_note).collect()
    }

    /// Runs `query` with `fill`, then again with the word-gap pattern when
    /// `fill` has more than one word, keeping first-seen order.
    fn gap_query(&self, query: &Query, fill: &str) -> StoreResult<NoteList> {
        let mut notes = self.query_notes(query, &[fill])?;
        if let Some(pattern) = queries::gap_pattern(fill) {
            tracing::debug!(query = query.name, %pattern, "word gap search");
            let more = self.query_notes(query, &[pattern.as_str()])?;
            notes.append_new_from(more);
        }
        Ok(notes)
    }
}

fn to_note(row: &Row) -> StoreResult<Note> {
    Ok(Note::new(row.get(ID_COLUMN)?, row.get(TITLE_COLUMN)?))
}
