//! Copilot application services.

mod ask_copilot;

pub use ask_copilot::{AskCopilotCommand, AskCopilotError, AskCopilotHandler, AskCopilotOutcome};
