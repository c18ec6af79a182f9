//! Leptos components for the notes UI.

mod note_form;
mod note_list;

pub use note_form::NoteForm;
pub use note_list::NoteList;
