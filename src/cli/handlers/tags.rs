//! Tag search handler.

use anyhow::{Context, Result};
use std::io;
use std::path::Path;

use super::open_db;
use crate::cli::TagsArgs;
use crate::cli::output::write_tags;

pub fn handle_tags(args: &TagsArgs, db_path: &Path, limit: usize) -> Result<()> {
    let db = open_db(db_path, limit)?;

    let tags = db
        .search_tags(&args.query)
        .with_context(|| format!("tag search failed for query: {}", args.query))?;

    write_tags(&mut io::stdout().lock(), &tags, args.format)?;
    db.close()?;
    Ok(())
}
