use notes_store::{NewNote, Note, NoteStore, StoreError};

/// Fields of the note being edited, staged until saved or cancelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub id: String,
    pub title: String,
    pub description: String,
}

/// The whole UI state, mutated only through the operations below.
///
/// Two invariants hold throughout: the collection is only ever replaced
/// wholesale after a successful re-fetch (a failed mutation leaves it
/// untouched), and no mutation is retried automatically.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub notes: Vec<Note>,
    /// Pending-create form fields.
    pub title: String,
    pub description: String,
    /// `Some` while one note's fields are staged for modification.
    pub editing: Option<EditDraft>,
    /// Id staged for deletion, awaiting explicit confirmation.
    pub pending_delete: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
    /// Set when the backend itself could not be reached, as opposed to the
    /// store rejecting a request.
    pub backend_unreachable: bool,
    pub search: String,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches all notes and replaces the local collection. On failure the
    /// current collection is kept and an error message is set; a transport
    /// failure additionally raises the backend-unreachable banner.
    pub async fn refresh(&mut self, store: &impl NoteStore) {
        self.loading = true;
        self.error = None;
        self.backend_unreachable = false;
        match store.list().await {
            Ok(notes) => self.notes = notes,
            Err(e) if e.is_unreachable() => {
                tracing::error!("failed to fetch notes: {e}");
                self.backend_unreachable = true;
                self.error = Some(
                    "Could not reach the notes backend. Start the notes-proxy server and try again."
                        .to_string(),
                );
            }
            Err(e) => {
                tracing::error!("failed to fetch notes: {e}");
                self.error = Some(describe("Failed to load notes", &e));
            }
        }
        self.loading = false;
    }

    /// Creates a note from the draft fields, then re-fetches. A blank
    /// title is rejected locally, before any store call.
    pub async fn submit_create(&mut self, store: &impl NoteStore) {
        if self.title.trim().is_empty() {
            self.error = Some("Title cannot be empty.".to_string());
            return;
        }
        self.loading = true;
        self.error = None;
        match store
            .create(NewNote::new(self.title.clone(), self.description.clone()))
            .await
        {
            Ok(_) => {
                self.title.clear();
                self.description.clear();
                self.refresh(store).await;
            }
            Err(e) => {
                tracing::error!("failed to save note: {e}");
                self.error = Some(describe("Failed to save note", &e));
            }
        }
        self.loading = false;
    }

    /// Stages a note's fields for editing.
    pub fn begin_edit(&mut self, note: &Note) {
        self.editing = Some(EditDraft {
            id: note.id.clone(),
            title: note.title.clone(),
            description: note.description.clone().unwrap_or_default(),
        });
        self.error = None;
    }

    /// Drops the edit draft without persisting anything.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Commits the edit draft, exits edit mode, then re-fetches. A blank
    /// edit title is rejected locally and keeps edit mode open.
    pub async fn submit_update(&mut self, store: &impl NoteStore) {
        let Some(draft) = self.editing.clone() else {
            return;
        };
        if draft.title.trim().is_empty() {
            self.error = Some("Title cannot be empty.".to_string());
            return;
        }
        self.loading = true;
        self.error = None;
        match store
            .update(&draft.id, NewNote::new(draft.title, draft.description))
            .await
        {
            Ok(_) => {
                self.editing = None;
                self.refresh(store).await;
            }
            Err(e) => {
                tracing::error!("failed to update note: {e}");
                self.error = Some(describe("Failed to update note", &e));
            }
        }
        self.loading = false;
    }

    /// Stages a note for deletion. The store is not called until
    /// [`confirm_remove`](Self::confirm_remove).
    pub fn request_remove(&mut self, id: impl Into<String>) {
        self.pending_delete = Some(id.into());
    }

    pub fn cancel_remove(&mut self) {
        self.pending_delete = None;
    }

    /// Deletes the staged note, then re-fetches. A no-op when nothing is
    /// staged.
    pub async fn confirm_remove(&mut self, store: &impl NoteStore) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };
        self.loading = true;
        self.error = None;
        match store.delete(&id).await {
            Ok(()) => self.refresh(store).await,
            Err(e) => {
                tracing::error!("failed to delete note: {e}");
                self.error = Some(describe("Failed to delete note", &e));
            }
        }
        self.loading = false;
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.title = value.into();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    pub fn set_search(&mut self, value: impl Into<String>) {
        self.search = value.into();
    }

    pub fn set_edit_title(&mut self, value: impl Into<String>) {
        if let Some(draft) = &mut self.editing {
            draft.title = value.into();
        }
    }

    pub fn set_edit_description(&mut self, value: impl Into<String>) {
        if let Some(draft) = &mut self.editing {
            draft.description = value.into();
        }
    }

    #[must_use]
    pub fn is_editing(&self, id: &str) -> bool {
        self.editing.as_ref().is_some_and(|draft| draft.id == id)
    }

    /// Current collection narrowed by the search term.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Note> {
        crate::filter::filter_notes(&self.notes, &self.search)
    }
}

fn describe(prefix: &str, err: &StoreError) -> String {
    match err.hint() {
        Some(hint) => format!("{prefix}: {err} ({hint})"),
        None => format!("{prefix}: {err}"),
    }
}
