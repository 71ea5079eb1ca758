//! Entitlement limits configuration
//!
//! The free-tier ceilings default by environment (production vs
//! development) and can be pinned individually through the environment,
//! e.g. `SALESFLOW__ENTITLEMENT__FREE_LEAD_LIMIT=10`. The same binary can
//! therefore run either flavor without a rebuild.

use serde::Deserialize;

use crate::domain::entitlement::FreeTierLimits;

use super::Environment;

/// Entitlement configuration section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntitlementConfig {
    /// Override for the cumulative free-tier lead ceiling.
    #[serde(default)]
    pub free_lead_limit: Option<u32>,

    /// Override for the per-day free-tier AI call ceiling.
    #[serde(default)]
    pub free_ai_calls_per_day: Option<u32>,
}

impl EntitlementConfig {
    /// Resolves the effective limits for the given environment.
    pub fn limits(&self, environment: Environment) -> FreeTierLimits {
        let mut limits = if environment.is_production() {
            FreeTierLimits::production()
        } else {
            FreeTierLimits::development()
        };
        if let Some(lead_limit) = self.free_lead_limit {
            limits.lead_limit = lead_limit;
        }
        if let Some(ai_calls) = self.free_ai_calls_per_day {
            limits.ai_calls_per_day = ai_calls;
        }
        limits
    }
}
