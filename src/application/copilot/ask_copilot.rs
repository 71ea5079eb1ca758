//! AskCopilotHandler - gated AI reply generation.
//!
//! Checks the daily AI quota before calling the copilot backend and counts
//! the call afterwards. With the production free-tier quota of zero, free
//! installations always land on the paywall outcome.

use std::sync::Arc;

use crate::application::entitlement::EntitlementGate;
use crate::ports::{
    CopilotContext, CopilotReply, EntitlementStoreError, SalesCopilot, SalesCopilotError,
};

/// Command to generate an AI reply suggestion.
#[derive(Debug, Clone)]
pub struct AskCopilotCommand {
    /// The incoming message to respond to.
    pub message: String,
    /// Conversation context for personalization.
    pub context: CopilotContext,
}

/// Result of a gated copilot call.
#[derive(Debug, Clone)]
pub enum AskCopilotOutcome {
    /// The copilot produced a suggestion.
    Reply(CopilotReply),
    /// Today's AI quota is exhausted; the caller routes to the upgrade
    /// flow.
    QuotaExhausted,
}

/// Errors from gated copilot calls.
#[derive(Debug, thiserror::Error)]
pub enum AskCopilotError {
    #[error(transparent)]
    Copilot(#[from] SalesCopilotError),

    /// The reply was generated but the local counter could not be
    /// persisted.
    #[error(transparent)]
    Storage(#[from] EntitlementStoreError),
}

/// Handler for gated copilot calls.
pub struct AskCopilotHandler {
    gate: Arc<EntitlementGate>,
    copilot: Arc<dyn SalesCopilot>,
}

impl AskCopilotHandler {
    pub fn new(gate: Arc<EntitlementGate>, copilot: Arc<dyn SalesCopilot>) -> Self {
        Self { gate, copilot }
    }

    pub async fn handle(
        &self,
        command: AskCopilotCommand,
    ) -> Result<AskCopilotOutcome, AskCopilotError> {
        if !self.gate.check_can_use_ai() {
            tracing::debug!("AI quota exhausted; routing to upgrade flow");
            return Ok(AskCopilotOutcome::QuotaExhausted);
        }

        let reply = self
            .copilot
            .generate_reply(&command.message, &command.context)
            .await?;

        self.gate.increment_ai_calls().await?;

        Ok(AskCopilotOutcome::Reply(reply))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};

    use crate::adapters::{InMemoryEntitlementStore, InMemorySubscriptionRemote};
    use crate::domain::entitlement::FreeTierLimits;

    // ════════════════════════════════════════════════════════════════════
    // Mock Implementation
    // ════════════════════════════════════════════════════════════════════

    #[derive(Default)]
    struct MockCopilot {
        calls: AtomicU32,
    }

    #[async_trait]
    impl SalesCopilot for MockCopilot {
        async fn generate_reply(
            &self,
            message: &str,
            _context: &CopilotContext,
        ) -> Result<CopilotReply, SalesCopilotError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(CopilotReply {
                reply: format!("Suggested answer to: {}", message),
                suggestions: vec![],
            })
        }
    }

    async fn loaded_gate(limits: FreeTierLimits) -> Arc<EntitlementGate> {
        let gate = Arc::new(EntitlementGate::new(
            limits,
            Arc::new(InMemoryEntitlementStore::new()),
            Arc::new(InMemorySubscriptionRemote::new()),
        ));
        gate.load().await.unwrap();
        gate
    }

    fn command() -> AskCopilotCommand {
        AskCopilotCommand {
            message: "The prospect says it is too expensive.".to_string(),
            context: CopilotContext::default(),
        }
    }

    // ════════════════════════════════════════════════════════════════════
    // Quota Tests
    // ════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn free_production_installation_never_reaches_the_copilot() {
        let gate = loaded_gate(FreeTierLimits::production()).await;
        let copilot = Arc::new(MockCopilot::default());
        let handler = AskCopilotHandler::new(gate, copilot.clone());

        let outcome = handler.handle(command()).await.unwrap();
        assert!(matches!(outcome, AskCopilotOutcome::QuotaExhausted));
        assert_eq!(copilot.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn pro_installation_gets_a_reply_and_is_counted() {
        let gate = loaded_gate(FreeTierLimits::production()).await;
        gate.upgrade_to_pro().await.unwrap();
        let handler = AskCopilotHandler::new(gate.clone(), Arc::new(MockCopilot::default()));

        let outcome = handler.handle(command()).await.unwrap();
        assert!(matches!(outcome, AskCopilotOutcome::Reply(_)));
        assert_eq!(gate.snapshot().ai_calls_today, 1);
    }

    #[tokio::test]
    async fn trial_quota_allows_a_bounded_number_of_calls() {
        let gate = loaded_gate(FreeTierLimits {
            lead_limit: 5,
            ai_calls_per_day: 2,
        })
        .await;
        let handler = AskCopilotHandler::new(gate.clone(), Arc::new(MockCopilot::default()));

        for _ in 0..2 {
            let outcome = handler.handle(command()).await.unwrap();
            assert!(matches!(outcome, AskCopilotOutcome::Reply(_)));
        }

        let outcome = handler.handle(command()).await.unwrap();
        assert!(matches!(outcome, AskCopilotOutcome::QuotaExhausted));
        assert_eq!(gate.snapshot().ai_calls_today, 2);
    }
}
