use serde::Deserialize;
use thiserror::Error;

use crate::shared::constants::GENERIC_ERROR_KEY;

/// Error body returned by the archive API: `{ "data": { "message": "<key>" } }`.
/// The `message` field is a translation key, not display text.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    data: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// No response from the server (DNS, connect, timeout). Never retried
    /// automatically; the caller surfaces it and the user retries manually.
    #[error("Network error: {0}")]
    Network(String),

    /// 401 from the server, or a rejected login. Receiving this on any call
    /// tears the session down.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Client-side validation failure or a 4xx carrying a server message key.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Referenced entity vanished between list-fetch and action.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unexpected server behavior (5xx, unparsable body).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Map a non-2xx response to the error taxonomy. The body's message key,
    /// when present, is carried through for the bilingual toast table.
    pub fn from_status(status: u16, body: &[u8]) -> ApiError {
        let key = serde_json::from_slice::<ErrorEnvelope>(body)
            .ok()
            .and_then(|envelope| envelope.data)
            .map(|body| body.message)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| GENERIC_ERROR_KEY.to_string());

        match status {
            401 => ApiError::Auth(key),
            404 => ApiError::NotFound(key),
            400..=499 => ApiError::Validation(key),
            _ => ApiError::Internal(format!("HTTP {}: {}", status, key)),
        }
    }

    /// The translation key to display for this error. `Network` and
    /// `Internal` carry transport detail for the logs, not a server key, so
    /// they always toast the generic message.
    pub fn message_key(&self) -> &str {
        match self {
            ApiError::Auth(key) | ApiError::Validation(key) | ApiError::NotFound(key) => key,
            ApiError::Network(_) | ApiError::Internal(_) => GENERIC_ERROR_KEY,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(e: validator::ValidationErrors) -> Self {
        ApiError::Validation(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
