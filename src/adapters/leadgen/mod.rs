//! Lead-generation adapters - implementations of the `LeadPipeline` port.

mod http;

pub use http::{HttpLeadPipeline, LeadPipelineApiConfig};
