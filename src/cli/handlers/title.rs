//! Title lookup handler.

use anyhow::{Context, Result};
use std::io;
use std::path::Path;

use super::open_db;
use crate::cli::TitleArgs;
use crate::cli::output::write_title;
use crate::domain::Note;

pub fn handle_title(args: &TitleArgs, db_path: &Path, limit: usize) -> Result<()> {
    let db = open_db(db_path, limit)?;

    let title = db
        .title(&args.id)
        .with_context(|| format!("title lookup failed for ID: {}", args.id))?;

    let note = Note::new(args.id.as_str(), title);
    write_title(&mut io::stdout().lock(), &note, args.format)?;
    db.close()?;
    Ok(())
}
