//! Insertion-ordered, duplicate-free collection of notes.

use super::Note;
use serde::{Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use std::ops::Index;

/// An ordered set of [`Note`]s.
///
/// Iteration follows the order in which each distinct note was first
/// appended. Appending a note that is already present is a no-op and does
/// not move it. There is no removal.
///
/// # Examples
///
/// ```
/// use bearsearch::domain::{Note, NoteList};
///
/// let mut exact = NoteList::new();
/// exact.append_new([Note::new("1", "Alpha Beta")]);
///
/// let mut gap = NoteList::new();
/// gap.append_new([Note::new("2", "Alpha and Beta"), Note::new("1", "Alpha Beta")]);
///
/// exact.append_new_from(gap);
/// let ids: Vec<_> = exact.iter().map(|n| n.id()).collect();
/// assert_eq!(ids, ["1", "2"]);
/// ```
#[derive(Clone, Default)]
pub struct NoteList {
    seen: HashSet<Note>,
    notes: Vec<Note>,
}

impl NoteList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if an equal note is already in the list.
    pub fn contains(&self, note: &Note) -> bool {
        self.seen.contains(note)
    }

    /// Appends a single note unless an equal note is already present.
    ///
    /// Returns true if the note was added.
    pub fn push_new(&mut self, note: Note) -> bool {
        if self.seen.contains(&note) {
            return false;
        }
        self.seen.insert(note.clone());
        self.notes.push(note);
        true
    }

    /// Appends every note not already present, in iteration order.
    pub fn append_new<I>(&mut self, notes: I)
    where
        I: IntoIterator<Item = Note>,
    {
        for note in notes {
            self.push_new(note);
        }
    }

    /// Merges another list into this one, skipping notes already present.
    pub fn append_new_from(&mut self, other: NoteList) {
        self.append_new(other.notes);
    }

    /// Returns the notes as a slice in first-insertion order.
    pub fn as_slice(&self) -> &[Note] {
        &self.notes
    }

    /// Returns the note at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    /// Consumes the list, returning its notes in order.
    pub fn into_vec(self) -> Vec<Note> {
        self.notes
    }
}

impl PartialEq for NoteList {
    fn eq(&self, other: &Self) -> bool {
        self.notes == other.notes
    }
}

impl Eq for NoteList {}

impl fmt::Debug for NoteList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NoteList").field(&self.notes).finish()
    }
}

impl Index<usize> for NoteList {
    type Output = Note;

    fn index(&self, index: usize) -> &Note {
        &self.notes[index]
    }
}

impl FromIterator<Note> for NoteList {
    fn from_iter<I: IntoIterator<Item = Note>>(iter: I) -> Self {
        let mut list = Self::new();
        list.append_new(iter);
        list
    }
}

impl Extend<Note> for NoteList {
    fn extend<I: IntoIterator<Item = Note>>(&mut self, iter: I) {
        self.append_new(iter);
    }
}

impl IntoIterator for NoteList {
    type Item = Note;
    type IntoIter = std::vec::IntoIter<Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.into_iter()
    }
}

impl<'a> IntoIterator for &'a NoteList {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}

impl Serialize for NoteList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.notes.serialize(serializer)
    }
}
