//! Note value type as read from the Bear database.

use serde::Serialize;
use std::fmt;

/// A note identified by Bear's unique identifier, paired with its title.
///
/// Notes are plain values: two notes are equal when both the identifier and
/// the title are equal.
///
/// # Examples
///
/// ```
/// use bearsearch::domain::Note;
///
/// let a = Note::new("9C1E-42", "Groceries");
/// let b = Note::new("9C1E-42", "Groceries");
/// assert_eq!(a, b);
/// assert_ne!(a, Note::new("9C1E-42", "Groceries (old)"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Note {
    id: String,
    title: String,
}

impl Note {
    /// Creates a note from its identifier and title.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    /// Returns the note's unique identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.id)
    }
}
