//! Isolated test environment with a temp Bear database.

// Allow dead code since this is a test utility shared by several test binaries
#![allow(dead_code)]

use super::{BearCommand, TestNote};
use crate::common::bear_schema;
use rusqlite::{Connection, params};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary Bear database.
///
/// The database and a private config directory live in a temp directory
/// that is automatically cleaned up on drop.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Root of the temp directory, used as HOME and config dir
    root: PathBuf,
    /// Writable connection used to seed the database
    conn: Connection,
}

impl TestEnv {
    /// Creates a new environment with an empty Bear database.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        let conn = Connection::open(root.join("database.sqlite")).expect("Failed to create database");
        conn.execute_batch(&bear_schema())
            .expect("Failed to create Bear schema");
        Self {
            _temp_dir: temp_dir,
            root,
            conn,
        }
    }

    /// Returns the path to the Bear database.
    pub fn db_path(&self) -> PathBuf {
        self.root.join("database.sqlite")
    }

    /// Returns the directory used as HOME and XDG config dir.
    pub fn home(&self) -> &Path {
        &self.root
    }

    /// Inserts a note, creating and attaching its tags.
    pub fn add_note(&self, note: &TestNote) {
        self.conn
            .execute(
                "INSERT INTO ZSFNOTE (ZUNIQUEIDENTIFIER, ZTITLE, ZTEXT, ZARCHIVED, ZTRASHED, ZMODIFICATIONDATE)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    note.id,
                    note.title,
                    note.text,
                    note.archived,
                    note.trashed,
                    note.modified
                ],
            )
            .expect("Failed to insert note");
        let note_pk = self.conn.last_insert_rowid();

        for tag in &note.tags {
            let tag_pk = self.tag_pk(tag, note.modified);
            self.conn
                .execute(
                    "INSERT OR IGNORE INTO Z_5TAGS (Z_5NOTES, Z_10TAGS) VALUES (?1, ?2)",
                    params![note_pk, tag_pk],
                )
                .expect("Failed to tag note");
        }
    }

    fn tag_pk(&self, title: &str, modified: f64) -> i64 {
        let existing = self.conn.query_row(
            "SELECT Z_PK FROM ZSFNOTETAG WHERE ZTITLE = ?1",
            [title],
            |row| row.get(0),
        );
        match existing {
            Ok(pk) => pk,
            Err(_) => {
                self.conn
                    .execute(
                        "INSERT INTO ZSFNOTETAG (ZTITLE, ZMODIFICATIONDATE) VALUES (?1, ?2)",
                        params![title, modified],
                    )
                    .expect("Failed to insert tag");
                self.conn.last_insert_rowid()
            }
        }
    }

    /// Writes the bear-search config file in this environment.
    pub fn write_config(&self, contents: &str) {
        for dir in [
            self.root.join("bear-search"),
            self.root.join("Library/Application Support/bear-search"),
        ] {
            std::fs::create_dir_all(&dir).expect("Failed to create config dir");
            std::fs::write(dir.join("config.toml"), contents).expect("Failed to write config");
        }
    }

    /// Creates a BearCommand configured for this environment's database.
    pub fn cmd(&self) -> BearCommand {
        self.bare_cmd().db(&self.db_path())
    }

    /// Creates a BearCommand isolated to this environment without `--db`.
    pub fn bare_cmd(&self) -> BearCommand {
        BearCommand::new().home(&self.root)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
