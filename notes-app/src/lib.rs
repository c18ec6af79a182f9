//! Headless UI core for the notes app.
//!
//! The state container, the search filter, and the list-presentation view
//! model live here, with no rendering dependencies, so every behavior the
//! UI exposes can be tested against an in-memory store. The Leptos front
//! end stays a thin layer over these operations.

mod filter;
mod state;
mod view;

pub use filter::{filter_notes, matches};
pub use state::{AppState, EditDraft};
pub use view::{DESCRIPTION_PREVIEW_CHARS, ListView, collapsed_description, list_view};
