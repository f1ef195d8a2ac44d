//! Output format types and writers for CLI commands.

use clap::ValueEnum;
use serde::Serialize;
use std::io::{self, Write};

use crate::domain::{Note, NoteList};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
    /// Plain identifiers (or tag names), one per line
    Ids,
    /// Bear x-callback URLs, one per line
    Urls,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Returns the URL that opens a note in Bear.
pub fn note_url(id: &str) -> String {
    format!(
        "bear://x-callback-url/open-note?id={}",
        urlencoding::encode(id)
    )
}

/// Returns the URL that opens a tag in Bear.
pub fn tag_url(name: &str) -> String {
    format!(
        "bear://x-callback-url/open-tag?name={}",
        urlencoding::encode(name)
    )
}

fn write_json<W: Write, T: Serialize>(out: &mut W, data: T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &Output::new(data))?;
    writeln!(out)
}

/// Writes a list of notes.
pub fn write_notes<W: Write>(out: &mut W, notes: &NoteList, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Human => {
            if notes.is_empty() {
                writeln!(out, "No matching notes found.")?;
            } else {
                for note in notes {
                    writeln!(out, "{}  {}", note.id(), note.title())?;
                }
                writeln!(out)?;
                writeln!(out, "{} result(s)", notes.len())?;
            }
        }
        OutputFormat::Json => write_json(out, notes)?,
        OutputFormat::Ids => {
            for note in notes {
                writeln!(out, "{}", note.id())?;
            }
        }
        OutputFormat::Urls => {
            for note in notes {
                writeln!(out, "{}", note_url(note.id()))?;
            }
        }
    }
    Ok(())
}

/// Writes a list of tag names.
pub fn write_tags<W: Write>(out: &mut W, tags: &[String], format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Human => {
            if tags.is_empty() {
                writeln!(out, "No matching tags found.")?;
            } else {
                for tag in tags {
                    writeln!(out, "#{}", tag)?;
                }
            }
        }
        OutputFormat::Json => write_json(out, tags)?,
        OutputFormat::Ids => {
            for tag in tags {
                writeln!(out, "{}", tag)?;
            }
        }
        OutputFormat::Urls => {
            for tag in tags {
                writeln!(out, "{}", tag_url(tag))?;
            }
        }
    }
    Ok(())
}

/// Writes a single note found by identifier.
pub fn write_title<W: Write>(out: &mut W, note: &Note, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Human => writeln!(out, "{}", note.title()),
        OutputFormat::Json => write_json(out, note),
        OutputFormat::Ids => writeln!(out, "{}", note.id()),
        OutputFormat::Urls => writeln!(out, "{}", note_url(note.id())),
    }
}
