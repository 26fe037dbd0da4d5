//! Assistant Endpoints
//!
//! Health check, chat turns and profile generation.

use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiError};
use crate::draft::Draft;
use crate::models::{ChatRequest, HealthStatus, ServerState};

#[derive(Deserialize)]
struct ChatResponse {
    reply: String,
}

#[derive(Serialize)]
struct ProfileRequest<'a> {
    intake: &'a Draft,
}

#[derive(Deserialize)]
struct ProfileResponse {
    profile: String,
}

impl ApiClient {
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.get_json("/api/health").await
    }

    /// Badge state for the current server, never failing
    pub async fn server_state(&self) -> ServerState {
        ServerState::from_health(self.health().await.ok())
    }

    pub async fn chat(&self, request: &ChatRequest) -> Result<String, ApiError> {
        let response: ChatResponse = self.post_json("/api/chat", request).await?;
        Ok(response.reply)
    }

    pub async fn generate_profile(&self, draft: &Draft) -> Result<String, ApiError> {
        let response: ProfileResponse = self
            .post_json("/api/profile", &ProfileRequest { intake: draft })
            .await?;
        Ok(response.profile)
    }
}
