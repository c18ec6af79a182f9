use reqwest::{Client, Response};
use serde::Deserialize;

use crate::{NewNote, Note, NoteStore, StoreError};

/// Client for the proxied REST surface (`/api/notes`).
///
/// This is what the browser uses when a backend process holds the store
/// credential. Transport failures map to [`StoreError::Unreachable`] so
/// the UI can tell "proxy not running" apart from a store rejection.
#[derive(Debug, Clone)]
pub struct ProxyApi {
    base: String,
    client: Client,
}

/// Proxy error body: `{"error": string}` on every failure.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

impl ProxyApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn notes_url(&self) -> String {
        format!("{}/api/notes", self.base)
    }

    fn note_url(&self, id: &str) -> String {
        format!("{}/api/notes/{id}", self.base)
    }

    async fn check(
        url: &str,
        result: Result<Response, reqwest::Error>,
    ) -> Result<Response, StoreError> {
        let response = result.map_err(|e| StoreError::transport(url, e))?;
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body).map_or_else(
            |_| {
                if body.is_empty() {
                    status.to_string()
                } else {
                    body.clone()
                }
            },
            |e| e.error,
        );
        Err(StoreError::rejected(message))
    }

    async fn read_notes(response: Response) -> Result<Vec<Note>, StoreError> {
        response
            .json::<Vec<Note>>()
            .await
            .map_err(|e| StoreError::rejected(format!("invalid response body: {}", e.without_url())))
    }

    fn single(mut notes: Vec<Note>) -> Result<Note, StoreError> {
        if notes.is_empty() {
            Err(StoreError::rejected("note no longer exists"))
        } else {
            Ok(notes.remove(0))
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl NoteStore for ProxyApi {
    async fn list(&self) -> Result<Vec<Note>, StoreError> {
        let url = self.notes_url();
        let response = Self::check(&url, self.client.get(&url).send().await).await?;
        Self::read_notes(response).await
    }

    async fn create(&self, note: NewNote) -> Result<Note, StoreError> {
        let url = self.notes_url();
        let response = Self::check(
            &url,
            self.client
                .post(&url)
                .json(&note.normalized())
                .send()
                .await,
        )
        .await?;
        // 201 with an array containing the created note.
        Self::read_notes(response).await.and_then(Self::single)
    }

    async fn update(&self, id: &str, note: NewNote) -> Result<Note, StoreError> {
        let url = self.note_url(id);
        let response = Self::check(
            &url,
            self.client.put(&url).json(&note.normalized()).send().await,
        )
        .await?;
        Self::read_notes(response).await.and_then(Self::single)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let url = self.note_url(id);
        Self::check(&url, self.client.delete(&url).send().await).await?;
        Ok(())
    }
}
