//! Core types: Note, NoteList

mod note;
mod note_list;

pub use note::Note;
pub use note_list::NoteList;
