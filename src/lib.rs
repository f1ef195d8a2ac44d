//! bearsearch - read-only search over a Bear notes database

pub mod cli;
pub mod domain;
pub mod search;
pub mod store;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    logging,
    handlers::{handle_completions, handle_recent, handle_search, handle_tags, handle_title},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Command::Completions(args) = &cli.command {
        return handle_completions(args);
    }

    let config = Config::load()?;
    let db_path = config.database_path(cli.db.as_ref())?;
    let limit = config.limit(cli.limit)?;
    tracing::debug!(db = %db_path.display(), limit, "resolved configuration");

    match &cli.command {
        Command::Search(args) => handle_search(args, &db_path, limit),
        Command::Recent(args) => handle_recent(args, &db_path, limit),
        Command::Tags(args) => handle_tags(args, &db_path, limit),
        Command::Title(args) => handle_title(args, &db_path, limit),
        Command::Completions(args) => handle_completions(args),
    }
}
