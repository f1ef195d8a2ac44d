//! Configuration file support.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::PathBuf;

use crate::search::DEFAULT_LIMIT;

/// Location of Bear's database relative to the home directory.
const BEAR_DATABASE: &str =
    "Library/Containers/net.shinyfrog.bear/Data/Documents/Application Data/database.sqlite";

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Path to Bear's database file
    pub database: Option<PathBuf>,

    /// Maximum rows returned by each query
    pub limit: Option<usize>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Parses configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/bear-search/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("bear-search")
            .join("config.toml")
    }

    /// Resolve the database path, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--db` argument
    /// 2. Config file `database` setting
    /// 3. Bear's default location under the home directory
    pub fn database_path(&self, cli_db: Option<&PathBuf>) -> Result<PathBuf> {
        if let Some(path) = cli_db.cloned().or_else(|| self.database.clone()) {
            return Ok(path);
        }
        default_database_path().context("could not determine home directory for Bear database")
    }

    /// Resolve the per-query row cap, with CLI argument taking precedence.
    pub fn limit(&self, cli_limit: Option<usize>) -> Result<usize> {
        let limit = cli_limit.or(self.limit).unwrap_or(DEFAULT_LIMIT);
        if limit == 0 {
            bail!("limit must be at least 1");
        }
        Ok(limit)
    }
}

/// Returns Bear's database path under the current user's home directory.
pub fn default_database_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(BEAR_DATABASE))
}
