use thiserror::Error;

/// Failures surfaced by the access layer.
///
/// The split matters to the UI: `Unreachable` means the transport failed
/// before the backend could answer (drives the "start the server" banner),
/// `Rejected` carries the upstream's own message verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("could not reach {url}: {reason}")]
    Unreachable { url: String, reason: String },

    #[error("{message}")]
    Rejected { message: String },
}

impl StoreError {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    pub(crate) fn transport(url: impl Into<String>, err: reqwest::Error) -> Self {
        Self::Unreachable {
            url: url.into(),
            reason: err.without_url().to_string(),
        }
    }

    /// True when the failure happened before the backend answered.
    pub const fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable { .. })
    }

    /// Remediation hint for store messages recognized by substring.
    pub fn hint(&self) -> Option<&'static str> {
        let Self::Rejected { message } = self else {
            return None;
        };
        let message = message.to_lowercase();
        if message.contains("row-level security") {
            Some("the store's access policy denied this write; check the anon policies on the notes table")
        } else if message.contains("invalid api key") || message.contains("jwt") {
            Some("the store did not accept the configured credential; check SUPABASE_KEY")
        } else {
            None
        }
    }
}
