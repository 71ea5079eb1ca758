//! Subscription state for one installation.
//!
//! The durable record of this installation's entitlement history: plan
//! tier, the cumulative free-tier lead count, and today's AI call count
//! with its reset date.
//!
//! # Invariants
//!
//! - Counters never go negative (unsigned) and are never decremented here;
//!   `ai_calls_today` only returns to zero through the daily rollover.
//! - Once the plan is Pro, every quota check passes regardless of counters.
//! - The reset date is a calendar date in the user's local timezone;
//!   rollover fires on the first check after the stored date stops
//!   matching today.

use chrono::Local;
use serde::{Deserialize, Serialize};

use super::{FreeTierLimits, PlanTier};

/// Today's calendar date in the user's local timezone, `YYYY-MM-DD`.
///
/// This is the value stored under `ai_calls_reset_date`.
pub fn local_calendar_date() -> String {
    Local::now().date_naive().to_string()
}

/// Entitlement state of one installation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionState {
    /// Current plan tier. Pro never reverts to Free.
    pub plan: PlanTier,

    /// Leads created while on the free tier. Monotonically increasing.
    pub lead_count: u32,

    /// AI-assisted actions performed on the current calendar day.
    pub ai_calls_today: u32,

    /// Local calendar date on which `ai_calls_today` was last reset.
    pub ai_calls_reset_date: String,
}

impl SubscriptionState {
    /// Fresh-install state: free tier, zero counters, reset date = today.
    pub fn fresh(today: impl Into<String>) -> Self {
        Self {
            plan: PlanTier::Free,
            lead_count: 0,
            ai_calls_today: 0,
            ai_calls_reset_date: today.into(),
        }
    }

    /// Whether another lead may be created under the given limits.
    ///
    /// Pure read; callers that get `false` route to the upgrade flow.
    pub fn can_add_lead(&self, limits: &FreeTierLimits) -> bool {
        if self.plan.is_pro() {
            return true;
        }
        !limits.lead_limit_reached(self.lead_count)
    }

    /// Whether another AI invocation is permitted today under the given
    /// limits.
    pub fn can_use_ai(&self, limits: &FreeTierLimits) -> bool {
        if self.plan.is_pro() {
            return true;
        }
        !limits.ai_limit_reached(self.ai_calls_today)
    }

    /// Counts one created lead.
    ///
    /// Does not enforce the limit; gating is the caller's job via
    /// [`can_add_lead`](Self::can_add_lead).
    pub fn record_lead(&mut self) {
        self.lead_count = self.lead_count.saturating_add(1);
    }

    /// Counts one AI invocation.
    ///
    /// Same no-self-enforcement contract as [`record_lead`](Self::record_lead).
    pub fn record_ai_call(&mut self) {
        self.ai_calls_today = self.ai_calls_today.saturating_add(1);
    }

    /// Upgrades the plan to Pro. Absorbing: there is no inverse.
    pub fn grant_pro(&mut self) {
        self.plan = PlanTier::Pro;
    }

    /// Applies the daily rollover if the stored reset date is not `today`.
    ///
    /// Returns `true` when state changed (the caller must persist).
    /// Calling again on the same day is a no-op.
    pub fn roll_over_if_new_day(&mut self, today: &str) -> bool {
        if self.ai_calls_reset_date == today {
            return false;
        }
        self.ai_calls_today = 0;
        self.ai_calls_reset_date = today.to_string();
        true
    }
}
