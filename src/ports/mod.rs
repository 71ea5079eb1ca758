//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `EntitlementStore` - durable local key-value storage for the gate
//! - `SubscriptionRemote` - the hosted per-account subscription record
//! - `LeadPipeline` - the remote verification/enrichment/intent pipeline
//! - `ScriptCatalog` - the hosted script and objection library
//! - `SalesCopilot` - AI reply generation

mod entitlement_store;
mod lead_pipeline;
mod sales_copilot;
mod script_catalog;
mod subscription_remote;

pub use entitlement_store::{keys, EntitlementStore, EntitlementStoreError};
pub use lead_pipeline::{
    AcquireLeadRequest, AcquireLeadResponse, AssignmentResult, CombinedScores, EnrichmentResult,
    IntentResult, IntentStage, LeadPipeline, LeadPipelineError, OutreachChannel, OutreachRequest,
    OutreachResult, PipelineStats, VerificationResult,
};
pub use sales_copilot::{
    ChatMessage, ChatRole, CopilotContext, CopilotReply, SalesCopilot, SalesCopilotError,
};
pub use script_catalog::{ScriptCatalog, ScriptCatalogError, ScriptFilter};
pub use subscription_remote::{SubscriptionRecord, SubscriptionRemote, SubscriptionRemoteError};
