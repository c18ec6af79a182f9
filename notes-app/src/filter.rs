//! Client-side search: case-insensitive substring match over title or
//! description. The whole collection is client-resident, so a linear scan
//! per keystroke is fine; no indexing, no debouncing.

use notes_store::Note;

/// True when the note's title or description contains `term`,
/// case-insensitively. An empty term matches everything.
#[must_use]
pub fn matches(note: &Note, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    note.title.to_lowercase().contains(&term)
        || note
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(&term))
}

#[must_use]
pub fn filter_notes<'a>(notes: &'a [Note], term: &str) -> Vec<&'a Note> {
    notes.iter().filter(|note| matches(note, term)).collect()
}
