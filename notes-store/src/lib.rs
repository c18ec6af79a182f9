//! Access layer for the hosted `notes` table.
//!
//! One interface, two interchangeable implementations: [`SupabaseStore`]
//! talks to the store's REST interface directly (used by the browser in the
//! direct-to-store deployment and by the proxy with the server-held
//! credential), [`ProxyApi`] talks to the proxy's `/api/notes` surface.
//! Which one the UI is handed is a configuration choice, not a code path.

mod api;
mod error;
mod model;
mod supabase;

pub use api::ProxyApi;
pub use error::StoreError;
pub use model::{NewNote, Note};
pub use supabase::SupabaseStore;

use async_trait::async_trait;

/// Boundary between the UI and the store.
///
/// Writes surface the single affected note even though the wire carries a
/// representation array; an empty array (e.g. updating an id that no longer
/// exists) is an error, not a silent success.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait NoteStore {
    /// All notes, newest first.
    async fn list(&self) -> Result<Vec<Note>, StoreError>;

    /// Persists a new note; the server assigns id and creation time.
    async fn create(&self, note: NewNote) -> Result<Note, StoreError>;

    /// Replaces title and description of an existing note in place.
    async fn update(&self, id: &str, note: NewNote) -> Result<Note, StoreError>;

    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}
