//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - local entitlement stores (in-memory, JSON file)
//! - `remote` - hosted subscription record (REST, in-memory test double)
//! - `leadgen` - the remote lead-generation pipeline
//! - `catalog` - script and objection libraries
//! - `copilot` - AI reply generation

pub mod catalog;
pub mod copilot;
pub mod leadgen;
pub mod remote;
pub mod storage;

pub use catalog::BundledScriptCatalog;
pub use copilot::{CopilotApiConfig, HttpSalesCopilot};
pub use leadgen::{HttpLeadPipeline, LeadPipelineApiConfig};
pub use remote::{HttpSubscriptionClient, InMemorySubscriptionRemote, SubscriptionApiConfig};
pub use storage::{InMemoryEntitlementStore, JsonFileStore};
