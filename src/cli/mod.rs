//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod logging;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// bear-search - search notes in the Bear database
#[derive(Parser, Debug)]
#[command(name = "bear-search", version, about, long_about = None)]
pub struct Cli {
    /// Path to Bear's database.sqlite (overrides config file)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Maximum rows returned by each query (overrides config file)
    #[arg(long, global = true)]
    pub limit: Option<usize>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search notes by title and body text
    Search(SearchArgs),

    /// List the most recently modified notes
    Recent(RecentArgs),

    /// Find tags containing a substring
    Tags(TagsArgs),

    /// Show the title of a note by its identifier
    Title(TitleArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Search text; multiple words also match with text between them
    pub query: String,

    /// Only match note titles
    #[arg(long, conflicts_with = "text_only")]
    pub title_only: bool,

    /// Only match note bodies
    #[arg(long)]
    pub text_only: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `recent` command
#[derive(Parser, Debug)]
pub struct RecentArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `tags` command
#[derive(Parser, Debug)]
pub struct TagsArgs {
    /// Substring to match against tag names (empty lists recent tags)
    #[arg(default_value = "")]
    pub query: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `title` command
#[derive(Parser, Debug)]
pub struct TitleArgs {
    /// Note unique identifier
    pub id: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
