//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `SALESFLOW` prefix and nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use salesflow_core::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let limits = config.free_tier_limits();
//! ```

mod backend;
mod entitlement;
mod environment;
mod error;
mod subscription_store;

pub use backend::BackendConfig;
pub use entitlement::EntitlementConfig;
pub use environment::Environment;
pub use error::{ConfigError, ValidationError};
pub use subscription_store::SubscriptionStoreConfig;

use serde::Deserialize;

use crate::domain::entitlement::FreeTierLimits;

/// Root application configuration
///
/// Contains all configuration sections for the SalesFlow client core.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Build flavor (selects default free-tier limits)
    #[serde(default)]
    pub environment: Environment,

    /// Free-tier quota overrides
    #[serde(default)]
    pub entitlement: EntitlementConfig,

    /// Backend API (lead pipeline, copilot)
    #[serde(default)]
    pub backend: BackendConfig,

    /// Hosted subscription record store
    #[serde(default)]
    pub subscription_store: SubscriptionStoreConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SALESFLOW` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SALESFLOW__ENVIRONMENT=production` -> `environment = Production`
    /// - `SALESFLOW__ENTITLEMENT__FREE_LEAD_LIMIT=10` -> `entitlement.free_lead_limit = 10`
    /// - `SALESFLOW__BACKEND__BASE_URL=...` -> `backend.base_url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SALESFLOW")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.backend.validate()?;
        self.subscription_store.validate(self.environment)?;
        Ok(())
    }

    /// The effective free-tier limits for this configuration.
    pub fn free_tier_limits(&self) -> FreeTierLimits {
        self.entitlement.limits(self.environment)
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entitlement::{DEV_FREE_LEAD_LIMIT, FREE_LEAD_LIMIT};
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("SALESFLOW__ENVIRONMENT");
        env::remove_var("SALESFLOW__ENTITLEMENT__FREE_LEAD_LIMIT");
        env::remove_var("SALESFLOW__ENTITLEMENT__FREE_AI_CALLS_PER_DAY");
        env::remove_var("SALESFLOW__BACKEND__BASE_URL");
        env::remove_var("SALESFLOW__SUBSCRIPTION_STORE__URL");
        env::remove_var("SALESFLOW__SUBSCRIPTION_STORE__API_KEY");
    }

    #[test]
    fn loads_with_no_environment_variables() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert!(!config.is_production());
        assert_eq!(config.free_tier_limits().lead_limit, DEV_FREE_LEAD_LIMIT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn production_environment_switches_limits() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("SALESFLOW__ENVIRONMENT", "production");
        let config = AppConfig::load();
        clear_env();

        let config = config.unwrap();
        assert!(config.is_production());
        assert_eq!(config.free_tier_limits().lead_limit, FREE_LEAD_LIMIT);
    }

    #[test]
    fn nested_overrides_reach_the_limits() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("SALESFLOW__ENVIRONMENT", "production");
        env::set_var("SALESFLOW__ENTITLEMENT__FREE_LEAD_LIMIT", "12");
        let config = AppConfig::load();
        clear_env();

        assert_eq!(config.unwrap().free_tier_limits().lead_limit, 12);
    }

    #[test]
    fn backend_url_override_is_validated() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("SALESFLOW__BACKEND__BASE_URL", "not-a-url");
        let config = AppConfig::load();
        clear_env();

        let config = config.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidBackendUrl)
        ));
    }

    #[test]
    fn subscription_store_url_is_optional() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();
        assert!(!config.subscription_store.is_configured());
    }
}
