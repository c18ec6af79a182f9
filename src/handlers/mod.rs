use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_macros::debug_handler;
use utoipa::OpenApi;

use std::sync::Arc;

use notes_store::{NewNote, Note, NoteStore, SupabaseStore};

use crate::error::{ErrorBody, internal_error};

#[derive(OpenApi)]
#[openapi(
    paths(list_notes, create_note, update_note, delete_note),
    components(schemas(Note, NewNote, ErrorBody)),
    tags(
        (name = "notes", description = "Notes proxy API")
    )
)]
pub struct ApiDoc;

#[utoipa::path(
    get,
    path = "/api/notes",
    responses(
        (status = 200, description = "All notes, newest first", body = Vec<Note>),
        (status = 500, description = "Store or transport failure", body = ErrorBody)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn list_notes(State(store): State<Arc<SupabaseStore>>) -> Response {
    match store.list().await {
        Ok(notes) => (StatusCode::OK, Json(notes)).into_response(),
        Err(e) => {
            tracing::error!("failed to list notes: {e}");
            internal_error(&e)
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/notes",
    request_body = NewNote,
    responses(
        (status = 201, description = "Array containing the created note", body = Vec<Note>),
        (status = 500, description = "Store or transport failure", body = ErrorBody)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn create_note(
    State(store): State<Arc<SupabaseStore>>,
    Json(payload): Json<NewNote>,
) -> Response {
    match store.create(payload).await {
        Ok(note) => (StatusCode::CREATED, Json(vec![note])).into_response(),
        Err(e) => {
            tracing::error!("failed to create note: {e}");
            internal_error(&e)
        }
    }
}

#[utoipa::path(
    put,
    path = "/api/notes/{id}",
    params(
        ("id" = String, Path, description = "Note id")
    ),
    request_body = NewNote,
    responses(
        (status = 200, description = "Array containing the updated note", body = Vec<Note>),
        (status = 500, description = "Store or transport failure", body = ErrorBody)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn update_note(
    State(store): State<Arc<SupabaseStore>>,
    Path(id): Path<String>,
    Json(payload): Json<NewNote>,
) -> Response {
    match store.update(&id, payload).await {
        Ok(note) => (StatusCode::OK, Json(vec![note])).into_response(),
        Err(e) => {
            tracing::error!("failed to update note {id}: {e}");
            internal_error(&e)
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/notes/{id}",
    params(
        ("id" = String, Path, description = "Note id")
    ),
    responses(
        (status = 204, description = "Note deleted"),
        (status = 500, description = "Store or transport failure", body = ErrorBody)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn delete_note(
    State(store): State<Arc<SupabaseStore>>,
    Path(id): Path<String>,
) -> Response {
    match store.delete(&id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            tracing::error!("failed to delete note {id}: {e}");
            internal_error(&e)
        }
    }
}
