//! HTTP adapter for the sales copilot backend.
//!
//! Calls the chat completion endpoint and normalizes the reply. The backend
//! has gone through several response shapes, so the adapter accepts any of
//! the known reply field names instead of pinning one.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::ports::{
    ChatMessage, CopilotContext, CopilotReply, SalesCopilot, SalesCopilotError,
};

/// Configuration for the copilot backend.
#[derive(Debug, Clone)]
pub struct CopilotApiConfig {
    /// Backend base URL.
    base_url: String,
}

impl CopilotApiConfig {
    /// Create a new configuration.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

/// Wire request for the chat completion endpoint.
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    message: &'a str,
    history: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<String>,
}

/// Wire response; the usable text may arrive under several names.
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    reply: Option<String>,
    response: Option<String>,
    message: Option<String>,
    content: Option<String>,
    answer: Option<String>,
    #[serde(default)]
    suggestions: Vec<String>,
}

impl CompletionResponse {
    fn into_reply(self) -> Option<CopilotReply> {
        let text = self
            .reply
            .or(self.response)
            .or(self.message)
            .or(self.content)
            .or(self.answer)
            .filter(|t| !t.trim().is_empty())?;
        Some(CopilotReply {
            reply: text,
            suggestions: self.suggestions,
        })
    }
}

/// HTTP client for the sales copilot.
pub struct HttpSalesCopilot {
    config: CopilotApiConfig,
    http_client: reqwest::Client,
}

impl HttpSalesCopilot {
    /// Create a new client with the given configuration.
    pub fn new(config: CopilotApiConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    fn completion_url(&self) -> String {
        format!("{}/api/chat/completion", self.config.base_url)
    }

    /// Folds the context fields into the free-form context string the
    /// endpoint accepts.
    fn context_line(context: &CopilotContext) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(name) = &context.lead_name {
            parts.push(format!("lead: {}", name));
        }
        if let Some(company) = &context.company {
            parts.push(format!("company: {}", company));
        }
        if let Some(situation) = &context.situation {
            parts.push(situation.clone());
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("; "))
        }
    }
}

#[async_trait]
impl SalesCopilot for HttpSalesCopilot {
    async fn generate_reply(
        &self,
        message: &str,
        context: &CopilotContext,
    ) -> Result<CopilotReply, SalesCopilotError> {
        let request = CompletionRequest {
            message,
            history: &context.history,
            context: Self::context_line(context),
        };

        let response = self
            .http_client
            .post(self.completion_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| SalesCopilotError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SalesCopilotError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        let body: CompletionResponse = response
            .json()
            .await
            .map_err(|e| SalesCopilotError::Backend {
                status: status.as_u16(),
                message: e.to_string(),
            })?;

        body.into_reply().ok_or(SalesCopilotError::EmptyReply)
    }
}
