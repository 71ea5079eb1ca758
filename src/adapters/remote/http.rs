//! Hosted subscription store adapter.
//!
//! Implements `SubscriptionRemote` against the hosted REST data store that
//! keeps one `user_subscriptions` row per account. Lookups filter by
//! `user_id`; writes are merge-duplicate upserts (last write wins).
//!
//! Secrets are handled via `secrecy::SecretString` and attached per request.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::domain::foundation::UserId;
use crate::ports::{SubscriptionRecord, SubscriptionRemote, SubscriptionRemoteError};

/// Configuration for the hosted subscription store.
#[derive(Clone)]
pub struct SubscriptionApiConfig {
    /// Base URL of the data store, e.g. `https://xyz.example.co`.
    base_url: String,

    /// Anonymous API key sent with every request.
    api_key: SecretString,
}

impl SubscriptionApiConfig {
    /// Create a new configuration.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: SecretString::new(api_key.into()),
        }
    }
}

/// REST client for the hosted subscription record.
pub struct HttpSubscriptionClient {
    config: SubscriptionApiConfig,
    http_client: reqwest::Client,
}

impl HttpSubscriptionClient {
    /// Create a new client with the given configuration.
    pub fn new(config: SubscriptionApiConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/user_subscriptions", self.config.base_url)
    }

    fn map_send_error(e: reqwest::Error) -> SubscriptionRemoteError {
        SubscriptionRemoteError::Network(e.to_string())
    }
}

#[async_trait]
impl SubscriptionRemote for HttpSubscriptionClient {
    async fn fetch(
        &self,
        user_id: &UserId,
    ) -> Result<Option<SubscriptionRecord>, SubscriptionRemoteError> {
        let response = self
            .http_client
            .get(self.table_url())
            .query(&[
                ("user_id", format!("eq.{}", user_id)),
                ("select", "user_id,is_pro,upgraded_at".to_string()),
            ])
            .header("apikey", self.config.api_key.expose_secret())
            .bearer_auth(self.config.api_key.expose_secret())
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SubscriptionRemoteError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        // The filter query returns an array; one row per account at most.
        let mut rows: Vec<SubscriptionRecord> = response
            .json()
            .await
            .map_err(|e| SubscriptionRemoteError::Decode(e.to_string()))?;

        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.remove(0))
        })
    }

    async fn upsert(&self, record: &SubscriptionRecord) -> Result<(), SubscriptionRemoteError> {
        let response = self
            .http_client
            .post(self.table_url())
            .header("apikey", self.config.api_key.expose_secret())
            .bearer_auth(self.config.api_key.expose_secret())
            .header("Prefer", "resolution=merge-duplicates")
            .json(record)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SubscriptionRemoteError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}
