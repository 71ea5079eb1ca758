//! Free-tier quota configuration.
//!
//! Defines the ceilings applied to installations that have not upgraded.
//! Production and development ship different values; both are named
//! constants so tests can pin either.

use serde::{Deserialize, Serialize};

/// Maximum leads a free-tier installation may create (production).
pub const FREE_LEAD_LIMIT: u32 = 5;

/// Maximum leads a free-tier installation may create (development/testing).
pub const DEV_FREE_LEAD_LIMIT: u32 = 50;

/// AI invocations per calendar day on the free tier (production).
///
/// Zero: free users get no AI.
pub const FREE_AI_CALLS_PER_DAY: u32 = 0;

/// AI invocations per calendar day on the free tier (development/testing).
pub const DEV_FREE_AI_CALLS_PER_DAY: u32 = 20;

/// Quota ceilings for the free tier.
///
/// Pro installations never consult these; see
/// [`SubscriptionState`](super::SubscriptionState).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeTierLimits {
    /// Cumulative lead ceiling.
    pub lead_limit: u32,
    /// Per-day AI call ceiling.
    pub ai_calls_per_day: u32,
}

impl FreeTierLimits {
    /// Production limits.
    pub fn production() -> Self {
        Self {
            lead_limit: FREE_LEAD_LIMIT,
            ai_calls_per_day: FREE_AI_CALLS_PER_DAY,
        }
    }

    /// Relaxed limits for development and trial builds.
    pub fn development() -> Self {
        Self {
            lead_limit: DEV_FREE_LEAD_LIMIT,
            ai_calls_per_day: DEV_FREE_AI_CALLS_PER_DAY,
        }
    }

    /// Check if the cumulative lead ceiling has been reached.
    pub fn lead_limit_reached(&self, lead_count: u32) -> bool {
        lead_count >= self.lead_limit
    }

    /// Check if today's AI call ceiling has been reached.
    pub fn ai_limit_reached(&self, ai_calls_today: u32) -> bool {
        ai_calls_today >= self.ai_calls_per_day
    }
}

impl Default for FreeTierLimits {
    fn default() -> Self {
        Self::production()
    }
}
