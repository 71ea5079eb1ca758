//! In-memory subscription remote for testing.
//!
//! Configurable implementation of `SubscriptionRemote` for unit and
//! integration tests: pre-seeded records, error injection, call counting.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::foundation::UserId;
use crate::ports::{SubscriptionRecord, SubscriptionRemote, SubscriptionRemoteError};

/// In-memory subscription remote.
///
/// # Example
///
/// ```ignore
/// let remote = InMemorySubscriptionRemote::new();
/// remote.seed(SubscriptionRecord::pro(user_id.clone()));
/// remote.fail_upserts();   // simulate network loss on writes
/// ```
#[derive(Default, Clone)]
pub struct InMemorySubscriptionRemote {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    records: HashMap<String, SubscriptionRecord>,
    fail_fetch: bool,
    fail_upsert: bool,
    fetch_calls: u32,
    upsert_calls: u32,
}

impl InMemorySubscriptionRemote {
    /// Create an empty remote.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record, keyed by its user id.
    pub fn seed(&self, record: SubscriptionRecord) {
        let mut state = self.inner.lock().unwrap();
        state.records.insert(record.user_id.to_string(), record);
    }

    /// Make every `fetch` fail with a network error.
    pub fn fail_fetches(&self) {
        self.inner.lock().unwrap().fail_fetch = true;
    }

    /// Make every `upsert` fail with a network error.
    pub fn fail_upserts(&self) {
        self.inner.lock().unwrap().fail_upsert = true;
    }

    /// The stored record for an account, if any.
    pub fn record(&self, user_id: &UserId) -> Option<SubscriptionRecord> {
        self.inner
            .lock()
            .unwrap()
            .records
            .get(user_id.as_str())
            .cloned()
    }

    /// How many times `fetch` was called.
    pub fn fetch_calls(&self) -> u32 {
        self.inner.lock().unwrap().fetch_calls
    }

    /// How many times `upsert` was called.
    pub fn upsert_calls(&self) -> u32 {
        self.inner.lock().unwrap().upsert_calls
    }
}

#[async_trait]
impl SubscriptionRemote for InMemorySubscriptionRemote {
    async fn fetch(
        &self,
        user_id: &UserId,
    ) -> Result<Option<SubscriptionRecord>, SubscriptionRemoteError> {
        let mut state = self.inner.lock().unwrap();
        state.fetch_calls += 1;
        if state.fail_fetch {
            return Err(SubscriptionRemoteError::Network(
                "simulated fetch failure".to_string(),
            ));
        }
        Ok(state.records.get(user_id.as_str()).cloned())
    }

    async fn upsert(&self, record: &SubscriptionRecord) -> Result<(), SubscriptionRemoteError> {
        let mut state = self.inner.lock().unwrap();
        state.upsert_calls += 1;
        if state.fail_upsert {
            return Err(SubscriptionRemoteError::Network(
                "simulated upsert failure".to_string(),
            ));
        }
        state
            .records
            .insert(record.user_id.to_string(), record.clone());
        Ok(())
    }
}
