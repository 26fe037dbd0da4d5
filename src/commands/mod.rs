//! Backend Bindings
//!
//! Thin wrappers around the external collaborators: the intake HTTP API and
//! the in-page OCR engine.

mod assistant;
mod intake;
mod ocr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

pub use intake::{intake_path, IntakeGateway};
pub use ocr::{normalize_text, recognize_text, OcrError, OcrProgress};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Server unreachable or request aborted
    #[error("server unreachable: {0}")]
    Transport(String),
    /// Non-2xx answer, with the server's `detail` when it sent one
    #[error("request failed with status {status}")]
    Application { status: u16, detail: Option<String> },
    #[error("unexpected response: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Value,
}

impl ApiError {
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| match b.detail {
                Value::Null => None,
                Value::String(s) if s.trim().is_empty() => None,
                Value::String(s) => Some(s),
                other => Some(other.to_string()),
            });
        ApiError::Application { status, detail }
    }

    /// Message for a toast or chat bubble. `unavailable` is what the user
    /// sees when the server could not be reached at all.
    pub fn user_message(&self, unavailable: &str) -> String {
        match self {
            ApiError::Transport(_) => unavailable.to_string(),
            ApiError::Application { detail: Some(detail), .. } => detail.clone(),
            ApiError::Application { status, detail: None } => {
                format!("Request failed (HTTP {status}). Please try again.")
            }
            ApiError::Decode(_) => "The server sent an unexpected response.".to_string(),
        }
    }
}

/// JSON-over-HTTP client for the intake API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!(path, "GET");
        let response = reqwest::Client::new()
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::decode(path, response).await
    }

    pub async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        debug!(path, "POST");
        let response = reqwest::Client::new()
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::decode(path, response).await
    }

    async fn decode<T: DeserializeOwned>(path: &str, response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(path, status = status.as_u16(), "request rejected");
            return Err(ApiError::from_response(status.as_u16(), &body));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}
