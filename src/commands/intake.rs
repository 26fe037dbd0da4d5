//! Intake Endpoints
//!
//! Submission, admin listing and fetch-for-view.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{ApiClient, ApiError};
use crate::draft::Draft;
use crate::models::IntakeListItem;

#[derive(Serialize)]
struct IntakeEnvelope<'a> {
    intake: &'a Draft,
}

#[derive(Deserialize)]
struct SubmitResponse {
    id: String,
}

#[derive(Deserialize)]
struct IntakeResponse {
    intake: Draft,
}

#[derive(Deserialize)]
struct ListResponse {
    #[serde(default)]
    items: Vec<IntakeListItem>,
}

/// Where completed drafts are handed off
#[async_trait(?Send)]
pub trait IntakeGateway {
    /// Submit the whole draft, returning the server-assigned id
    async fn submit_intake(&self, draft: &Draft) -> Result<String, ApiError>;
}

#[async_trait(?Send)]
impl IntakeGateway for ApiClient {
    async fn submit_intake(&self, draft: &Draft) -> Result<String, ApiError> {
        let response: SubmitResponse = self
            .post_json("/api/intake/submit", &IntakeEnvelope { intake: draft })
            .await?;
        info!(id = %response.id, "intake submitted");
        Ok(response.id)
    }
}

/// Path for fetching one submission; the id is opaque and gets encoded
pub fn intake_path(id: &str) -> String {
    format!("/api/intake/get/{}", utf8_percent_encode(id, NON_ALPHANUMERIC))
}

impl ApiClient {
    pub async fn list_intakes(&self) -> Result<Vec<IntakeListItem>, ApiError> {
        let response: ListResponse = self.get_json("/api/intake/list").await?;
        Ok(response.items)
    }

    pub async fn get_intake(&self, id: &str) -> Result<Draft, ApiError> {
        let response: IntakeResponse = self.get_json(&intake_path(id)).await?;
        Ok(response.intake)
    }
}
