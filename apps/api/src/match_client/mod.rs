//! Match client — the single outbound call to the candidate matching service.
//!
//! The matching service embeds the brief and returns its nearest candidates.
//! Its internals are not our concern: we send one request, read `matches`,
//! and report. One attempt only, no retry, no client-side timeout.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::brief::export::to_compact_json;
use crate::brief::RoleBrief;

pub const DEFAULT_MATCH_ENDPOINT: &str = "http://localhost:5000/match";

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Match service returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Request body. The brief travels as a JSON *string* so the service can
/// embed it verbatim.
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchRequest {
    pub job_description: String,
}

impl MatchRequest {
    pub fn for_brief(brief: &RoleBrief) -> Result<Self, MatchError> {
        Ok(Self {
            job_description: to_compact_json(brief)?,
        })
    }
}

/// Only `matches` is read; every other field the service sends is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchResponse {
    #[serde(default)]
    pub matches: Vec<serde_json::Value>,
}

/// Candidate matching backend. Carried in `AppState` as
/// `Arc<dyn CandidateMatcher>` so handlers can be exercised without a network.
#[async_trait]
pub trait CandidateMatcher: Send + Sync {
    async fn find_matches(&self, brief: &RoleBrief) -> Result<MatchResponse, MatchError>;
}

#[derive(Clone)]
pub struct HttpCandidateMatcher {
    client: Client,
    endpoint: String,
}

impl HttpCandidateMatcher {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CandidateMatcher for HttpCandidateMatcher {
    async fn find_matches(&self, brief: &RoleBrief) -> Result<MatchResponse, MatchError> {
        let body = MatchRequest::for_brief(brief)?;

        debug!("Sending match request to {}", self.endpoint);
        let response = self.client.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(MatchError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        let parsed: MatchResponse = serde_json::from_slice(&bytes)?;
        debug!("Match service returned {} candidates", parsed.matches.len());

        Ok(parsed)
    }
}
