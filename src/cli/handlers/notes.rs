//! Note search and recent-notes handlers.

use anyhow::{Context, Result};
use std::io;
use std::path::Path;

use super::open_db;
use crate::cli::output::write_notes;
use crate::cli::{RecentArgs, SearchArgs};

pub fn handle_search(args: &SearchArgs, db_path: &Path, limit: usize) -> Result<()> {
    let db = open_db(db_path, limit)?;

    let notes = if args.title_only {
        db.search_notes_by_title(&args.query)
    } else if args.text_only {
        db.search_notes_by_text(&args.query)
    } else {
        db.search_notes(&args.query)
    }
    .with_context(|| format!("search failed for query: {}", args.query))?;

    write_notes(&mut io::stdout().lock(), &notes, args.format)?;
    db.close()?;
    Ok(())
}

pub fn handle_recent(args: &RecentArgs, db_path: &Path, limit: usize) -> Result<()> {
    let db = open_db(db_path, limit)?;

    let notes = db.recent().context("failed to list recent notes")?;

    write_notes(&mut io::stdout().lock(), &notes, args.format)?;
    db.close()?;
    Ok(())
}
