//! Command handlers for the CLI.

mod completions;
mod notes;
mod tags;
mod title;

use anyhow::{Context, Result};
use std::path::Path;

use crate::search::BearDb;

pub use completions::handle_completions;
pub use notes::{handle_recent, handle_search};
pub use tags::handle_tags;
pub use title::handle_title;

// ===========================================
// Shared Utilities
// ===========================================

/// Opens the Bear database read-only with the configured row cap.
pub(crate) fn open_db(db_path: &Path, limit: usize) -> Result<BearDb> {
    let db = BearDb::open(db_path)
        .with_context(|| format!("failed to open Bear database at {}", db_path.display()))?;
    Ok(db.with_limit(limit))
}
