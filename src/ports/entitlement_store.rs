//! EntitlementStore port - durable local key-value storage.
//!
//! The entitlement gate persists its state as a handful of string-valued
//! keys, mirroring the mobile platform's key-value store. Implementations
//! may keep the pairs in memory (tests) or in a JSON document on disk.
//!
//! # Design
//!
//! - **Source of truth**: whatever this store holds wins over any remote
//!   record; the remote can only upgrade the pro flag.
//! - **String values**: counters are decimal strings, the pro flag is the
//!   literal `"true"`, dates are `YYYY-MM-DD` (see [`keys`]).

use async_trait::async_trait;

/// The well-known keys of the entitlement record.
pub mod keys {
    /// `"true"` once upgraded; absent otherwise.
    pub const IS_PRO: &str = "is_pro";
    /// Cumulative lead count, decimal string.
    pub const LEAD_COUNT: &str = "lead_count";
    /// Today's AI call count, decimal string.
    pub const AI_CALLS_TODAY: &str = "ai_calls_today";
    /// Local calendar date of the last AI-counter reset.
    pub const AI_CALLS_RESET_DATE: &str = "ai_calls_reset_date";
    /// Cached identifier of the signed-in account, if any.
    pub const USER_ID: &str = "user_id";
}

/// Errors from the local entitlement store.
#[derive(Debug, thiserror::Error)]
pub enum EntitlementStoreError {
    /// Underlying I/O failed. Writes that fail leave the durable copy
    /// unchanged; callers must treat the mutation as not having happened.
    #[error("storage I/O error: {0}")]
    Io(String),

    /// The stored document could not be encoded or decoded.
    #[error("storage serialization error: {0}")]
    Serialization(String),
}

/// Port for the durable local key-value store backing the entitlement gate.
#[async_trait]
pub trait EntitlementStore: Send + Sync {
    /// Reads a value. `Ok(None)` when the key has never been written.
    async fn get(&self, key: &str) -> Result<Option<String>, EntitlementStoreError>;

    /// Writes a value durably.
    ///
    /// # Errors
    ///
    /// Returns `Io`/`Serialization` when the value could not be made
    /// durable; the previous value is still in effect.
    async fn put(&self, key: &str, value: &str) -> Result<(), EntitlementStoreError>;

    /// Removes a key. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), EntitlementStoreError>;
}
