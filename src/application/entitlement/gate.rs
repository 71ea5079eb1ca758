//! The entitlement gate.
//!
//! Owns the subscription state of this installation and decides, without
//! network access, whether an action is permitted under the current plan.
//! One instance is constructed at startup and handed to every screen that
//! needs a quota decision; collaborators are injected so tests can swap in
//! fakes.
//!
//! # Design Decisions
//!
//! - **Local-first**: durable local storage is the source of truth. The
//!   remote subscription record can only upgrade the plan, never downgrade
//!   it or touch the counters.
//! - **Fail-open remote**: lookup and upsert failures are logged and
//!   absorbed. An upgrade the user believes they have is never silently
//!   revoked.
//! - **Persist-then-commit**: mutations write the durable copy first and
//!   update the in-memory state only on success, so a failed persist leaves
//!   the state unchanged.
//! - **Serialized mutations**: every mutation runs behind one async lock,
//!   so two rapid increments cannot both read the same starting value.

use std::sync::{Arc, RwLock};

use tokio::sync::Mutex;

use crate::domain::entitlement::{
    local_calendar_date, FreeTierLimits, PlanTier, SubscriptionState,
};
use crate::domain::foundation::UserId;
use crate::ports::{
    keys, EntitlementStore, EntitlementStoreError, SubscriptionRecord, SubscriptionRemote,
};

/// Quota and plan decisions for one installation.
pub struct EntitlementGate {
    limits: FreeTierLimits,
    store: Arc<dyn EntitlementStore>,
    remote: Arc<dyn SubscriptionRemote>,

    /// In-memory state; `None` until the first [`load`](Self::load).
    state: RwLock<Option<SubscriptionState>>,

    /// Serializes load and all mutations across their storage round-trips.
    mutation: Mutex<()>,
}

impl EntitlementGate {
    /// Create a gate with injected collaborators.
    ///
    /// The gate is unusable until [`load`](Self::load) has run once.
    pub fn new(
        limits: FreeTierLimits,
        store: Arc<dyn EntitlementStore>,
        remote: Arc<dyn SubscriptionRemote>,
    ) -> Self {
        Self {
            limits,
            store,
            remote,
            state: RwLock::new(None),
            mutation: Mutex::new(()),
        }
    }

    /// The limits this gate enforces for free-tier installations.
    pub fn limits(&self) -> &FreeTierLimits {
        &self.limits
    }

    /// Whether [`load`](Self::load) has completed at least once.
    pub fn is_loaded(&self) -> bool {
        self.state.read().unwrap().is_some()
    }

    /// Restores state from durable storage, applies the daily rollover, and
    /// reconciles with the remote subscription record.
    ///
    /// Storage reads that fail are treated as "no record" (defaults apply).
    /// The remote lookup is best-effort: any failure is logged and the
    /// local state stands. Safe to call on every app foreground; the
    /// rollover fires at most once per calendar day.
    ///
    /// # Errors
    ///
    /// Only local persistence failures propagate.
    pub async fn load(&self) -> Result<SubscriptionState, EntitlementStoreError> {
        let _guard = self.mutation.lock().await;
        let today = local_calendar_date();

        let is_pro = matches!(self.read_key(keys::IS_PRO).await.as_deref(), Some("true"));
        let lead_count = self.read_counter(keys::LEAD_COUNT).await;
        let ai_calls_today = self.read_counter(keys::AI_CALLS_TODAY).await;
        // An absent reset date reads as empty so the first load of a fresh
        // install persists today's date.
        let reset_date = self.read_key(keys::AI_CALLS_RESET_DATE).await.unwrap_or_default();

        let mut state = SubscriptionState {
            plan: if is_pro { PlanTier::Pro } else { PlanTier::Free },
            lead_count,
            ai_calls_today,
            ai_calls_reset_date: reset_date,
        };

        if state.roll_over_if_new_day(&today) {
            self.store.put(keys::AI_CALLS_TODAY, "0").await?;
            self.store.put(keys::AI_CALLS_RESET_DATE, &today).await?;
            tracing::debug!(%today, "daily AI quota reset");
        }

        if let Some(user_id) = self.cached_user_id().await {
            match self.remote.fetch(&user_id).await {
                Ok(Some(record)) if record.is_pro && !state.plan.is_pro() => {
                    state.grant_pro();
                    self.store.put(keys::IS_PRO, "true").await?;
                    tracing::info!(user_id = %user_id, "remote subscription upgraded local plan to pro");
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "subscription lookup failed; keeping local state");
                }
            }
        }

        self.commit(state.clone());
        Ok(state)
    }

    /// Whether another lead may be created under the current plan.
    ///
    /// Pure read, no side effects. On `false`, callers route to the
    /// upgrade flow.
    ///
    /// # Panics
    ///
    /// Panics if called before [`load`](Self::load); that is a programming
    /// error, not a runtime condition.
    pub fn check_can_add_lead(&self) -> bool {
        self.current().can_add_lead(&self.limits)
    }

    /// Whether another AI invocation is permitted today.
    ///
    /// With the production quota of zero this is always `false` for free
    /// installations.
    ///
    /// # Panics
    ///
    /// Panics if called before [`load`](Self::load).
    pub fn check_can_use_ai(&self) -> bool {
        self.current().can_use_ai(&self.limits)
    }

    /// Counts one created lead and persists the new value.
    ///
    /// Does not enforce the limit; call
    /// [`check_can_add_lead`](Self::check_can_add_lead) first.
    ///
    /// # Errors
    ///
    /// On a persistence failure the in-memory state is left unchanged.
    pub async fn increment_lead_count(&self) -> Result<(), EntitlementStoreError> {
        let _guard = self.mutation.lock().await;
        let mut next = self.current();
        next.record_lead();
        self.store
            .put(keys::LEAD_COUNT, &next.lead_count.to_string())
            .await?;
        self.commit(next);
        Ok(())
    }

    /// Counts one AI invocation and persists the new value.
    ///
    /// Same contract as [`increment_lead_count`](Self::increment_lead_count).
    pub async fn increment_ai_calls(&self) -> Result<(), EntitlementStoreError> {
        let _guard = self.mutation.lock().await;
        let mut next = self.current();
        next.record_ai_call();
        self.store
            .put(keys::AI_CALLS_TODAY, &next.ai_calls_today.to_string())
            .await?;
        self.commit(next);
        Ok(())
    }

    /// Upgrades this installation to Pro.
    ///
    /// The local grant is committed first and is authoritative; the remote
    /// record is then upserted best-effort and a failure never rolls the
    /// grant back.
    ///
    /// # Errors
    ///
    /// Only the local persistence failure propagates (in which case
    /// nothing was granted).
    pub async fn upgrade_to_pro(&self) -> Result<(), EntitlementStoreError> {
        let _guard = self.mutation.lock().await;
        let mut next = self.current();
        next.grant_pro();
        self.store.put(keys::IS_PRO, "true").await?;
        self.commit(next);
        tracing::info!("installation upgraded to pro");

        if let Some(user_id) = self.cached_user_id().await {
            let record = SubscriptionRecord::pro(user_id);
            if let Err(e) = self.remote.upsert(&record).await {
                tracing::warn!(error = %e, "subscription upsert failed; local pro grant stands");
            }
        }

        Ok(())
    }

    /// Caches the signed-in account id used to key remote lookups.
    pub async fn cache_user_id(&self, user_id: &UserId) -> Result<(), EntitlementStoreError> {
        self.store.put(keys::USER_ID, user_id.as_str()).await
    }

    /// Forgets the cached account id (sign-out).
    pub async fn clear_user_id(&self) -> Result<(), EntitlementStoreError> {
        self.store.remove(keys::USER_ID).await
    }

    /// A copy of the current in-memory state.
    ///
    /// # Panics
    ///
    /// Panics if called before [`load`](Self::load).
    pub fn snapshot(&self) -> SubscriptionState {
        self.current()
    }

    fn current(&self) -> SubscriptionState {
        self.state
            .read()
            .unwrap()
            .clone()
            .expect("entitlement state accessed before EntitlementGate::load()")
    }

    fn commit(&self, state: SubscriptionState) {
        *self.state.write().unwrap() = Some(state);
    }

    /// Reads a key, treating storage read faults as "no record".
    async fn read_key(&self, key: &str) -> Option<String> {
        match self.store.get(key).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "storage read failed; using default");
                None
            }
        }
    }

    async fn read_counter(&self, key: &str) -> u32 {
        self.read_key(key)
            .await
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(0)
    }

    async fn cached_user_id(&self) -> Option<UserId> {
        let raw = self.read_key(keys::USER_ID).await?;
        UserId::new(raw).ok()
    }
}
