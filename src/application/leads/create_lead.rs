//! CreateLeadHandler - gated lead creation.
//!
//! The canonical consumer of the entitlement gate: check the quota first,
//! route to the paywall when it fails, and count the lead only after the
//! pipeline accepted it. The increment itself never enforces the limit;
//! this handler owns the call order.

use std::sync::Arc;

use crate::application::entitlement::EntitlementGate;
use crate::domain::foundation::{LeadId, ValidationError};
use crate::domain::lead::LeadSource;
use crate::ports::{AcquireLeadRequest, EntitlementStoreError, LeadPipeline, LeadPipelineError};

/// Command to create a lead.
#[derive(Debug, Clone)]
pub struct CreateLeadCommand {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub source: LeadSource,
    pub tags: Vec<String>,
}

/// Result of a gated lead creation.
#[derive(Debug, Clone)]
pub enum CreateLeadOutcome {
    /// The pipeline accepted the lead.
    Created {
        lead_id: LeadId,
        /// True when the pipeline matched an existing lead.
        is_duplicate: bool,
    },
    /// The free-tier lead limit is reached; the caller routes to the
    /// upgrade flow.
    LimitReached,
}

/// Errors from gated lead creation.
#[derive(Debug, thiserror::Error)]
pub enum CreateLeadError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Pipeline(#[from] LeadPipelineError),

    /// The lead was created remotely but the local counter could not be
    /// persisted.
    #[error(transparent)]
    Storage(#[from] EntitlementStoreError),
}

/// Handler for gated lead creation.
pub struct CreateLeadHandler {
    gate: Arc<EntitlementGate>,
    pipeline: Arc<dyn LeadPipeline>,
}

impl CreateLeadHandler {
    pub fn new(gate: Arc<EntitlementGate>, pipeline: Arc<dyn LeadPipeline>) -> Self {
        Self { gate, pipeline }
    }

    pub async fn handle(
        &self,
        command: CreateLeadCommand,
    ) -> Result<CreateLeadOutcome, CreateLeadError> {
        if command.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name").into());
        }

        if !self.gate.check_can_add_lead() {
            tracing::debug!("lead limit reached; routing to upgrade flow");
            return Ok(CreateLeadOutcome::LimitReached);
        }

        let request = AcquireLeadRequest {
            name: command.name,
            email: command.email,
            phone: command.phone,
            source: command.source,
            tags: command.tags,
        };
        let response = self.pipeline.acquire(&request).await?;

        self.gate.increment_lead_count().await?;

        Ok(CreateLeadOutcome::Created {
            lead_id: response.lead_id,
            is_duplicate: response.is_duplicate,
        })
    }
}
