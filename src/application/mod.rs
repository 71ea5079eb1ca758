//! Application layer - services wiring the domain to the ports.
//!
//! Each service receives its collaborators through the constructor so a
//! test can assemble it with fakes. The entitlement gate lives here because
//! it owns state and storage round-trips; the handlers encode the call
//! order the quota contract requires (check first, act, then count).

pub mod copilot;
pub mod entitlement;
pub mod leads;
pub mod scripts;

pub use copilot::{AskCopilotCommand, AskCopilotError, AskCopilotHandler, AskCopilotOutcome};
pub use entitlement::EntitlementGate;
pub use leads::{CreateLeadCommand, CreateLeadError, CreateLeadHandler, CreateLeadOutcome};
pub use scripts::{CopiedScript, CopyScriptCommand, CopyScriptHandler};
