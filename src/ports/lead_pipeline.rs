//! LeadPipeline port - typed wrapper over the remote scoring pipeline.
//!
//! Verification (v-score), enrichment (e-score), intent analysis (i-score),
//! acquisition, assignment, and outreach all run server-side; this port only
//! types the requests and responses. The client never re-computes a score,
//! it buckets the returned numbers for display
//! (see [`LeadTemperature`](crate::domain::lead::LeadTemperature)).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{LeadId, Timestamp};
use crate::domain::lead::{priority_from_score, LeadSource, LeadTemperature};

/// Result of contact-data verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    pub lead_id: LeadId,
    /// Verification score, 0-100.
    pub v_score: u32,
    pub email_valid: Option<bool>,
    pub phone_valid: Option<bool>,
    pub is_duplicate: Option<bool>,
}

/// Result of firmographic/person enrichment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichmentResult {
    pub lead_id: LeadId,
    /// Enrichment score, 0-100.
    pub e_score: u32,
    pub company_industry: Option<String>,
    pub company_size_range: Option<String>,
    pub person_title: Option<String>,
    pub person_seniority: Option<String>,
    pub icp_match_score: Option<u32>,
}

/// Buying-journey stage inferred by the intent model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntentStage {
    Awareness,
    Consideration,
    Decision,
    Purchase,
}

/// Result of intent analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentResult {
    pub lead_id: LeadId,
    /// Intent score, 0-100.
    pub i_score: u32,
    pub stage: IntentStage,
}

/// All pipeline scores for one lead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombinedScores {
    pub lead_id: LeadId,
    /// Overall priority score, 0-100.
    pub p_score: u32,
    pub v_score: Option<u32>,
    pub e_score: Option<u32>,
    pub i_score: Option<u32>,
}

impl CombinedScores {
    /// Display bucket for this lead.
    pub fn temperature(&self) -> LeadTemperature {
        LeadTemperature::from_scores(self.p_score, self.v_score)
    }

    /// List-ordering priority, 1-5.
    pub fn priority(&self) -> u8 {
        priority_from_score(self.p_score)
    }
}

/// Request to capture a lead through the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcquireLeadRequest {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub source: LeadSource,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Response from lead acquisition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcquireLeadResponse {
    pub lead_id: LeadId,
    /// True when the pipeline matched an existing lead instead of creating
    /// a new one.
    #[serde(default)]
    pub is_duplicate: bool,
}

/// Result of routing a lead to a seller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentResult {
    pub lead_id: LeadId,
    pub assigned_to: Option<String>,
    /// Routing score used by the assignment engine.
    pub score: Option<u32>,
}

/// Channel for an outreach message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutreachChannel {
    Email,
    LinkedinDm,
    Whatsapp,
    Sms,
}

/// Request to schedule a personalized outreach message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutreachRequest {
    pub lead_id: LeadId,
    pub channel: OutreachChannel,
    /// Template to personalize; the server picks one when absent.
    pub template_id: Option<String>,
}

/// Result of outreach creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutreachResult {
    pub outreach_id: Option<String>,
    pub scheduled_at: Option<Timestamp>,
}

/// Aggregate pipeline health numbers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineStats {
    pub total_leads: u32,
    pub hot_leads: u32,
    pub assigned_leads: u32,
    pub pending_outreach: u32,
}

/// Errors from the remote pipeline.
#[derive(Debug, thiserror::Error)]
pub enum LeadPipelineError {
    /// Could not reach the backend at all.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("pipeline error ({status}): {message}")]
    Backend { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
}

/// Port for the remote lead-generation pipeline.
#[async_trait]
pub trait LeadPipeline: Send + Sync {
    /// Runs contact-data verification for a lead.
    async fn verify(&self, lead_id: LeadId) -> Result<VerificationResult, LeadPipelineError>;

    /// Runs enrichment for a lead.
    async fn enrich(&self, lead_id: LeadId) -> Result<EnrichmentResult, LeadPipelineError>;

    /// Runs intent analysis for a lead.
    async fn analyze_intent(&self, lead_id: LeadId) -> Result<IntentResult, LeadPipelineError>;

    /// Captures a new lead.
    async fn acquire(
        &self,
        request: &AcquireLeadRequest,
    ) -> Result<AcquireLeadResponse, LeadPipelineError>;

    /// Routes a lead to the best seller.
    async fn assign(&self, lead_id: LeadId) -> Result<AssignmentResult, LeadPipelineError>;

    /// Schedules personalized outreach for a lead.
    async fn create_outreach(
        &self,
        request: &OutreachRequest,
    ) -> Result<OutreachResult, LeadPipelineError>;

    /// Fetches the combined scores for a lead.
    async fn scores(&self, lead_id: LeadId) -> Result<CombinedScores, LeadPipelineError>;

    /// Fetches aggregate pipeline statistics.
    async fn pipeline_stats(&self) -> Result<PipelineStats, LeadPipelineError>;
}
