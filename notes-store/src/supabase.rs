use reqwest::{Client, Response};
use serde::Deserialize;

use crate::{NewNote, Note, NoteStore, StoreError};

/// Direct client for the store's REST interface (PostgREST conventions).
///
/// With the public read/write-restricted key this is the browser's
/// direct-to-store path; with the server-held key it is the proxy's
/// upstream. Ordering is always requested from the store itself.
#[derive(Debug, Clone)]
pub struct SupabaseStore {
    base: String,
    key: String,
    client: Client,
}

/// PostgREST error body.
#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: String,
}

impl SupabaseStore {
    pub fn new(base_url: impl Into<String>, key: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base: base_url.trim_end_matches('/').to_string(),
            key: key.into(),
            client: Client::new(),
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/notes", self.base)
    }

    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request.header("apikey", &self.key).bearer_auth(&self.key)
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
        let message = serde_json::from_str::<PostgrestError>(&body).map_or_else(
            |_| {
                if body.is_empty() {
                    status.to_string()
                } else {
                    body.clone()
                }
            },
            |e| e.message,
        );
        tracing::debug!("store rejected request to {url}: {status} {message}");
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
            // PostgREST answers an empty representation when the id filter
            // matched no rows (or the policy filtered the write away).
            Err(StoreError::rejected("note no longer exists"))
        } else {
            Ok(notes.remove(0))
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl NoteStore for SupabaseStore {
    async fn list(&self) -> Result<Vec<Note>, StoreError> {
        let url = format!("{}?select=*&order=created_at.desc", self.table_url());
        tracing::debug!("GET {url}");
        let response = Self::check(&url, self.authed(self.client.get(&url)).send().await).await?;
        Self::read_notes(response).await
    }

    async fn create(&self, note: NewNote) -> Result<Note, StoreError> {
        let url = format!("{}?select=*", self.table_url());
        tracing::debug!("POST {url}");
        let response = Self::check(
            &url,
            self.authed(self.client.post(&url))
                .header("Prefer", "return=representation")
                .json(&[note.normalized()])
                .send()
                .await,
        )
        .await?;
        Self::read_notes(response).await.and_then(Self::single)
    }

    async fn update(&self, id: &str, note: NewNote) -> Result<Note, StoreError> {
        let url = format!("{}?id=eq.{id}&select=*", self.table_url());
        tracing::debug!("PATCH {url}");
        let response = Self::check(
            &url,
            self.authed(self.client.patch(&url))
                .header("Prefer", "return=representation")
                .json(&note.normalized())
                .send()
                .await,
        )
        .await?;
        Self::read_notes(response).await.and_then(Self::single)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let url = format!("{}?id=eq.{id}", self.table_url());
        tracing::debug!("DELETE {url}");
        Self::check(&url, self.authed(self.client.delete(&url)).send().await).await?;
        Ok(())
    }
}
