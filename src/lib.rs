//! Notes proxy backend.
//!
//! A thin trust boundary in front of the hosted store: the browser talks to
//! `/api/notes` here, and this process forwards each operation to the store
//! with the server-held credential. Without that credential the process
//! refuses to start.

pub mod config;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use notes_store::SupabaseStore;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the application router around a configured store client.
pub fn router(store: SupabaseStore) -> Router {
    Router::new()
        .route("/api/notes", get(handlers::list_notes))
        .route("/api/notes", post(handlers::create_note))
        .route("/api/notes/{id}", put(handlers::update_note))
        .route("/api/notes/{id}", delete(handlers::delete_note))
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-doc/openapi.json", handlers::ApiDoc::openapi()),
        )
        .with_state(Arc::new(store))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
