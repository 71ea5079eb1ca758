//! Hosted subscription store configuration

use secrecy::SecretString;
use serde::Deserialize;

use super::error::ValidationError;
use super::Environment;

/// Configuration for the hosted subscription record store.
///
/// When no URL is configured the remote reconciliation is disabled and the
/// gate runs purely on local state (useful for development and tests).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubscriptionStoreConfig {
    /// Base URL of the hosted data store.
    #[serde(default)]
    pub url: Option<String>,

    /// Anonymous API key for the data store.
    #[serde(default)]
    pub api_key: Option<SecretString>,
}

impl SubscriptionStoreConfig {
    /// Whether remote reconciliation is configured at all.
    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }

    /// Validate subscription store configuration
    pub fn validate(&self, environment: Environment) -> Result<(), ValidationError> {
        if let Some(url) = &self.url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidSubscriptionStoreUrl);
            }
            if environment.is_production() && self.api_key.is_none() {
                return Err(ValidationError::ApiKeyRequiredInProduction);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_store_is_valid_everywhere() {
        let config = SubscriptionStoreConfig::default();
        assert!(!config.is_configured());
        assert!(config.validate(Environment::Development).is_ok());
        assert!(config.validate(Environment::Production).is_ok());
    }

    #[test]
    fn bad_url_is_rejected() {
        let config = SubscriptionStoreConfig {
            url: Some("example.co".to_string()),
            api_key: None,
        };
        assert!(matches!(
            config.validate(Environment::Development),
            Err(ValidationError::InvalidSubscriptionStoreUrl)
        ));
    }

    #[test]
    fn production_requires_an_api_key() {
        let config = SubscriptionStoreConfig {
            url: Some("https://xyz.example.co".to_string()),
            api_key: None,
        };
        assert!(config.validate(Environment::Development).is_ok());
        assert!(matches!(
            config.validate(Environment::Production),
            Err(ValidationError::ApiKeyRequiredInProduction)
        ));
    }
}
