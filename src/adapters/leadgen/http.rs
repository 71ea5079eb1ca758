//! HTTP adapter for the remote lead-generation pipeline.
//!
//! Thin typed client over the backend's `/api/lead-generation` endpoints.
//! Scoring, SLA tracking, and outreach scheduling all happen server-side;
//! this adapter only shapes requests and decodes responses.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::LeadId;
use crate::ports::{
    AcquireLeadRequest, AcquireLeadResponse, AssignmentResult, CombinedScores, EnrichmentResult,
    IntentResult, LeadPipeline, LeadPipelineError, OutreachRequest, OutreachResult, PipelineStats,
    VerificationResult,
};

const API_PREFIX: &str = "/api/lead-generation";

/// Configuration for the pipeline backend.
#[derive(Clone)]
pub struct LeadPipelineApiConfig {
    /// Backend base URL, e.g. `https://api.example.ai`.
    base_url: String,

    /// Bearer token of the signed-in session, when available.
    bearer_token: Option<SecretString>,
}

impl LeadPipelineApiConfig {
    /// Create a new configuration without authentication.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bearer_token: None,
        }
    }

    /// Attach a session bearer token.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(SecretString::new(token.into()));
        self
    }
}

/// Error envelope the backend uses for non-success responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
    message: Option<String>,
}

/// Body for endpoints that take just a lead id.
#[derive(Debug, Serialize)]
struct LeadIdBody {
    lead_id: LeadId,
}

/// HTTP client for the lead-generation pipeline.
pub struct HttpLeadPipeline {
    config: LeadPipelineApiConfig,
    http_client: reqwest::Client,
}

impl HttpLeadPipeline {
    /// Create a new client with the given configuration.
    pub fn new(config: LeadPipelineApiConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.config.base_url, API_PREFIX, path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.bearer_token {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }

    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, LeadPipelineError> {
        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body
                    .detail
                    .or(body.message)
                    .unwrap_or_else(|| "API error".to_string()),
                Err(_) => "API error".to_string(),
            };
            return Err(LeadPipelineError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| LeadPipelineError::Decode(e.to_string()))
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, LeadPipelineError> {
        let response = self
            .authorize(self.http_client.post(self.url(path)))
            .json(body)
            .send()
            .await
            .map_err(|e| LeadPipelineError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, LeadPipelineError> {
        let response = self
            .authorize(self.http_client.get(self.url(path)))
            .send()
            .await
            .map_err(|e| LeadPipelineError::Network(e.to_string()))?;
        Self::decode(response).await
    }
}

#[async_trait]
impl LeadPipeline for HttpLeadPipeline {
    async fn verify(&self, lead_id: LeadId) -> Result<VerificationResult, LeadPipelineError> {
        self.post_json("/verify", &LeadIdBody { lead_id }).await
    }

    async fn enrich(&self, lead_id: LeadId) -> Result<EnrichmentResult, LeadPipelineError> {
        self.post_json("/enrich", &LeadIdBody { lead_id }).await
    }

    async fn analyze_intent(&self, lead_id: LeadId) -> Result<IntentResult, LeadPipelineError> {
        self.post_json("/intent", &LeadIdBody { lead_id }).await
    }

    async fn acquire(
        &self,
        request: &AcquireLeadRequest,
    ) -> Result<AcquireLeadResponse, LeadPipelineError> {
        self.post_json("/acquire", request).await
    }

    async fn assign(&self, lead_id: LeadId) -> Result<AssignmentResult, LeadPipelineError> {
        self.post_json("/assign", &LeadIdBody { lead_id }).await
    }

    async fn create_outreach(
        &self,
        request: &OutreachRequest,
    ) -> Result<OutreachResult, LeadPipelineError> {
        self.post_json("/outreach", request).await
    }

    async fn scores(&self, lead_id: LeadId) -> Result<CombinedScores, LeadPipelineError> {
        self.get_json(&format!("/score/{}", lead_id)).await
    }

    async fn pipeline_stats(&self) -> Result<PipelineStats, LeadPipelineError> {
        self.get_json("/stats/pipeline").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_base_prefix_and_path() {
        let client = HttpLeadPipeline::new(LeadPipelineApiConfig::new("https://api.example.ai/"));
        assert_eq!(
            client.url("/verify"),
            "https://api.example.ai/api/lead-generation/verify"
        );
    }

    #[test]
    fn error_body_prefers_detail_over_message() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail": "rate limited", "message": "other"}"#).unwrap();
        assert_eq!(body.detail.as_deref(), Some("rate limited"));
    }

    #[test]
    fn lead_id_body_serializes_to_wire_shape() {
        let lead_id = LeadId::new();
        let json = serde_json::to_value(LeadIdBody { lead_id }).unwrap();
        assert_eq!(json["lead_id"], lead_id.to_string());
    }
}
