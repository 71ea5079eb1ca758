//! SalesCopilot port - AI reply generation for lead conversations.
//!
//! The model runs behind the backend; this port carries the conversation
//! context over and a normalized reply back. Calls through this port count
//! against the free tier's daily AI quota, enforced by the entitlement gate
//! in the application layer, not here.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Who said a message in the conversation history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One message of conversation history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Context the copilot can personalize on.
#[derive(Debug, Clone, Default)]
pub struct CopilotContext {
    /// Name of the lead being discussed.
    pub lead_name: Option<String>,
    /// Company/vertical the user sells for.
    pub company: Option<String>,
    /// Free-form description of the situation.
    pub situation: Option<String>,
    /// Prior messages, oldest first.
    pub history: Vec<ChatMessage>,
}

/// A normalized copilot answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopilotReply {
    /// The suggested message text.
    pub reply: String,
    /// Optional alternative phrasings.
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// Errors from the copilot backend.
#[derive(Debug, thiserror::Error)]
pub enum SalesCopilotError {
    /// Could not reach the backend at all.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("copilot error ({status}): {message}")]
    Backend { status: u16, message: String },

    /// The response carried no usable reply text.
    #[error("empty reply from copilot")]
    EmptyReply,
}

/// Port for AI-assisted reply generation.
#[async_trait]
pub trait SalesCopilot: Send + Sync {
    /// Generates a reply suggestion for the given message and context.
    async fn generate_reply(
        &self,
        message: &str,
        context: &CopilotContext,
    ) -> Result<CopilotReply, SalesCopilotError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sales_copilot_is_object_safe() {
        fn _accepts_dyn(_copilot: &dyn SalesCopilot) {}
    }

    #[test]
    fn chat_message_constructors_set_roles() {
        assert_eq!(ChatMessage::user("hi").role, ChatRole::User);
        assert_eq!(ChatMessage::assistant("hey").role, ChatRole::Assistant);
    }

    #[test]
    fn reply_suggestions_default_to_empty() {
        let reply: CopilotReply = serde_json::from_str("{\"reply\": \"ok\"}").unwrap();
        assert!(reply.suggestions.is_empty());
    }
}
