//! SubscriptionRemote port - the hosted subscription record.
//!
//! One record per account in a `user_subscriptions` store, shared across an
//! account's installations. This client never locks it: upserts are
//! last-write-wins with no conflict detection, and every call is advisory.
//! The gate absorbs all errors from this port (fail-open to local state).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId};

/// The remote subscription record for one account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionRecord {
    /// Account the record belongs to.
    pub user_id: UserId,

    /// Whether the account has upgraded.
    pub is_pro: bool,

    /// When the upgrade happened, if ever.
    pub upgraded_at: Option<Timestamp>,
}

impl SubscriptionRecord {
    /// A pro record stamped now, as written on upgrade.
    pub fn pro(user_id: UserId) -> Self {
        Self {
            user_id,
            is_pro: true,
            upgraded_at: Some(Timestamp::now()),
        }
    }
}

/// Errors from the remote subscription store.
#[derive(Debug, thiserror::Error)]
pub enum SubscriptionRemoteError {
    /// Could not reach the backend at all.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("backend error ({status}): {message}")]
    Backend { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
}

/// Port for the hosted subscription record.
#[async_trait]
pub trait SubscriptionRemote: Send + Sync {
    /// Fetches the record for an account. `Ok(None)` when no record exists.
    async fn fetch(
        &self,
        user_id: &UserId,
    ) -> Result<Option<SubscriptionRecord>, SubscriptionRemoteError>;

    /// Writes or replaces the record for `record.user_id`.
    ///
    /// Last-write-wins; there is no compare-and-set.
    async fn upsert(&self, record: &SubscriptionRecord) -> Result<(), SubscriptionRemoteError>;
}
