//! Application environment

use serde::Deserialize;

/// Which build flavor the process runs as.
///
/// Selects the default free-tier limits; development builds get the
/// relaxed trial quotas so the paywall can be exercised without burning
/// the production ceilings.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Check if running in production
    pub fn is_production(&self) -> bool {
        *self == Environment::Production
    }
}
