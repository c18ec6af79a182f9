//! Presentation decisions for the note list, kept out of the components so
//! they can be tested headlessly.

use notes_store::Note;

use crate::AppState;

/// Descriptions longer than this many characters start collapsed.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// What the list area should render. An empty collection and an empty
/// filtered-result set get different messages.
#[derive(Debug, PartialEq)]
pub enum ListView<'a> {
    /// No notes exist at all.
    Empty {
        heading: &'static str,
        detail: &'static str,
    },
    /// Notes exist but the search term excludes all of them.
    NoMatches {
        heading: &'static str,
        detail: &'static str,
    },
    Notes(Vec<&'a Note>),
}

#[must_use]
pub fn list_view(state: &AppState) -> ListView<'_> {
    if state.notes.is_empty() {
        return ListView::Empty {
            heading: "No notes yet",
            detail: "Create a new note to get started.",
        };
    }
    let filtered = state.filtered();
    if filtered.is_empty() {
        ListView::NoMatches {
            heading: "No results",
            detail: "No notes match your search.",
        }
    } else {
        ListView::Notes(filtered)
    }
}

/// The collapsed preview of a description, or `None` when it already fits
/// and no expand toggle is needed. Truncation counts characters, not
/// bytes.
#[must_use]
pub fn collapsed_description(description: &str) -> Option<String> {
    if description.chars().count() <= DESCRIPTION_PREVIEW_CHARS {
        return None;
    }
    let mut preview: String = description
        .chars()
        .take(DESCRIPTION_PREVIEW_CHARS)
        .collect();
    preview.push_str("...");
    Some(preview)
}
