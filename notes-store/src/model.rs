use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A persisted note.
///
/// `id` and `created_at` are assigned by the store; `created_at` never
/// changes and is the sole sort key (descending).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Note {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Write payload for create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewNote {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewNote {
    /// Builds a payload from form fields. An empty or whitespace-only
    /// description becomes `None` so the store persists NULL.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
        }
        .normalized()
    }

    /// Re-applies the empty-description rule to a payload deserialized
    /// as-is, e.g. a request body that arrived with `"description": ""`.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self
            .description
            .as_deref()
            .is_some_and(|d| d.trim().is_empty())
        {
            self.description = None;
        }
        self
    }
}
