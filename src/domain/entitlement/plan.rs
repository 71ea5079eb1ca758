//! Plan tier definitions.
//!
//! Represents the subscription tiers available in SalesFlow.

use serde::{Deserialize, Serialize};

/// Subscription plan tier.
///
/// Determines whether quota checks apply. Pro is an absorbing state:
/// nothing in this subsystem transitions an installation back to Free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    /// Free tier - limited lead count, no AI by default.
    Free,

    /// Pro tier - unlimited leads and AI usage.
    Pro,
}

impl PlanTier {
    /// Returns true if this tier bypasses all quota checks.
    pub fn is_pro(&self) -> bool {
        matches!(self, PlanTier::Pro)
    }

    /// Returns the display name for this tier.
    pub fn display_name(&self) -> &'static str {
        match self {
            PlanTier::Free => "Free",
            PlanTier::Pro => "Pro",
        }
    }
}

impl std::fmt::Display for PlanTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
