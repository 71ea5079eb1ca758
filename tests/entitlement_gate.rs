//! Integration tests for the entitlement gate.
//!
//! Exercises the gate end-to-end against the in-memory store and remote:
//! restore-or-default loading, the daily AI-quota rollover, free-tier
//! boundaries, the pro bypass, optimistic upgrades under remote failure,
//! and the one-directional remote reconciliation. A second round runs the
//! same lifecycle against the JSON file store to cover process restarts.

use std::sync::Arc;

use salesflow_core::adapters::{
    InMemoryEntitlementStore, InMemorySubscriptionRemote, JsonFileStore,
};
use salesflow_core::application::EntitlementGate;
use salesflow_core::domain::entitlement::{
    local_calendar_date, FreeTierLimits, PlanTier, FREE_AI_CALLS_PER_DAY, FREE_LEAD_LIMIT,
};
use salesflow_core::domain::foundation::UserId;
use salesflow_core::ports::{keys, EntitlementStore, SubscriptionRecord};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .ok();
}

fn production_limits() -> FreeTierLimits {
    FreeTierLimits {
        lead_limit: FREE_LEAD_LIMIT,
        ai_calls_per_day: FREE_AI_CALLS_PER_DAY,
    }
}

fn gate(
    limits: FreeTierLimits,
    store: Arc<dyn EntitlementStore>,
    remote: Arc<InMemorySubscriptionRemote>,
) -> EntitlementGate {
    EntitlementGate::new(limits, store, remote)
}

fn yesterday() -> String {
    chrono::Local::now()
        .date_naive()
        .pred_opt()
        .expect("not the first representable day")
        .to_string()
}

fn user() -> UserId {
    UserId::new("user-123").unwrap()
}

async fn seed(store: &InMemoryEntitlementStore, entries: &[(&str, &str)]) {
    for (key, value) in entries {
        store.put(key, value).await.unwrap();
    }
}

// =============================================================================
// Fresh Install
// =============================================================================

#[tokio::test]
async fn fresh_install_defaults_and_counts_to_the_limit() {
    init_tracing();
    let store = Arc::new(InMemoryEntitlementStore::new());
    let remote = Arc::new(InMemorySubscriptionRemote::new());
    let gate = gate(production_limits(), store.clone(), remote);

    let state = gate.load().await.unwrap();
    assert_eq!(state.plan, PlanTier::Free);
    assert_eq!(state.lead_count, 0);
    assert_eq!(state.ai_calls_today, 0);
    assert!(gate.check_can_add_lead());

    for _ in 0..FREE_LEAD_LIMIT {
        assert!(gate.check_can_add_lead());
        gate.increment_lead_count().await.unwrap();
    }

    // The sixth check fails with the production limit of five.
    assert!(!gate.check_can_add_lead());
    assert_eq!(
        store.get(keys::LEAD_COUNT).await.unwrap().as_deref(),
        Some("5")
    );
}

#[tokio::test]
async fn first_load_persists_the_reset_date() {
    let store = Arc::new(InMemoryEntitlementStore::new());
    let remote = Arc::new(InMemorySubscriptionRemote::new());
    let gate = gate(production_limits(), store.clone(), remote);

    gate.load().await.unwrap();

    assert_eq!(
        store.get(keys::AI_CALLS_RESET_DATE).await.unwrap(),
        Some(local_calendar_date())
    );
}

// =============================================================================
// Free-Tier Boundary
// =============================================================================

#[tokio::test]
async fn lead_check_flips_exactly_at_the_limit() {
    let store = Arc::new(InMemoryEntitlementStore::new());
    seed(&store, &[(keys::LEAD_COUNT, "4")]).await;
    let remote = Arc::new(InMemorySubscriptionRemote::new());
    let gate = gate(production_limits(), store, remote);

    gate.load().await.unwrap();
    assert!(gate.check_can_add_lead());

    gate.increment_lead_count().await.unwrap();
    assert_eq!(gate.snapshot().lead_count, FREE_LEAD_LIMIT);
    assert!(!gate.check_can_add_lead());
}

#[tokio::test]
async fn increments_do_not_clamp_beyond_the_limit() {
    // Caller-discipline contract: skipping the precheck pushes the counter
    // past the limit without an error.
    let store = Arc::new(InMemoryEntitlementStore::new());
    seed(&store, &[(keys::LEAD_COUNT, "5")]).await;
    let remote = Arc::new(InMemorySubscriptionRemote::new());
    let gate = gate(production_limits(), store, remote);

    gate.load().await.unwrap();
    gate.increment_lead_count().await.unwrap();
    gate.increment_lead_count().await.unwrap();

    assert_eq!(gate.snapshot().lead_count, 7);
    assert!(!gate.check_can_add_lead());
}

// =============================================================================
// Pro Bypass
// =============================================================================

#[tokio::test]
async fn pro_flag_bypasses_every_quota() {
    let store = Arc::new(InMemoryEntitlementStore::new());
    seed(
        &store,
        &[
            (keys::IS_PRO, "true"),
            (keys::LEAD_COUNT, "9999"),
            (keys::AI_CALLS_TODAY, "9999"),
        ],
    )
    .await;
    let remote = Arc::new(InMemorySubscriptionRemote::new());
    let gate = gate(production_limits(), store, remote);

    let state = gate.load().await.unwrap();
    assert_eq!(state.plan, PlanTier::Pro);
    assert!(gate.check_can_add_lead());
    assert!(gate.check_can_use_ai());
}

#[tokio::test]
async fn zero_ai_quota_blocks_free_users_for_any_count() {
    for count in ["0", "1", "17"] {
        let store = Arc::new(InMemoryEntitlementStore::new());
        seed(&store, &[(keys::AI_CALLS_TODAY, count)]).await;
        let remote = Arc::new(InMemorySubscriptionRemote::new());
        let gate = gate(production_limits(), store, remote);

        gate.load().await.unwrap();
        assert!(!gate.check_can_use_ai(), "count = {}", count);
    }
}

// =============================================================================
// Daily Rollover
// =============================================================================

#[tokio::test]
async fn stale_reset_date_zeroes_the_ai_counter() {
    let store = Arc::new(InMemoryEntitlementStore::new());
    seed(
        &store,
        &[
            (keys::AI_CALLS_TODAY, "5"),
            (keys::AI_CALLS_RESET_DATE, &yesterday()),
        ],
    )
    .await;
    let remote = Arc::new(InMemorySubscriptionRemote::new());
    let gate = gate(production_limits(), store.clone(), remote);

    let state = gate.load().await.unwrap();
    assert_eq!(state.ai_calls_today, 0);
    assert_eq!(state.ai_calls_reset_date, local_calendar_date());

    // The reset is durable, not just in-memory.
    assert_eq!(
        store.get(keys::AI_CALLS_TODAY).await.unwrap().as_deref(),
        Some("0")
    );
    assert_eq!(
        store.get(keys::AI_CALLS_RESET_DATE).await.unwrap(),
        Some(local_calendar_date())
    );
}

#[tokio::test]
async fn second_load_on_the_same_day_changes_nothing() {
    let store = Arc::new(InMemoryEntitlementStore::new());
    seed(
        &store,
        &[
            (keys::AI_CALLS_TODAY, "5"),
            (keys::AI_CALLS_RESET_DATE, &yesterday()),
        ],
    )
    .await;
    let remote = Arc::new(InMemorySubscriptionRemote::new());
    let gate = gate(
        FreeTierLimits {
            lead_limit: 5,
            ai_calls_per_day: 10,
        },
        store,
        remote,
    );

    gate.load().await.unwrap();
    gate.increment_ai_calls().await.unwrap();
    gate.increment_ai_calls().await.unwrap();
    assert_eq!(gate.snapshot().ai_calls_today, 2);

    // App comes back to the foreground on the same day: no second reset.
    let state = gate.load().await.unwrap();
    assert_eq!(state.ai_calls_today, 2);
}

// =============================================================================
// Remote Reconciliation
// =============================================================================

#[tokio::test]
async fn remote_pro_record_upgrades_local_free_state() {
    let store = Arc::new(InMemoryEntitlementStore::new());
    seed(&store, &[(keys::USER_ID, user().as_str())]).await;
    let remote = Arc::new(InMemorySubscriptionRemote::new());
    remote.seed(SubscriptionRecord::pro(user()));
    let gate = gate(production_limits(), store.clone(), remote);

    let state = gate.load().await.unwrap();
    assert_eq!(state.plan, PlanTier::Pro);
    assert_eq!(store.get(keys::IS_PRO).await.unwrap().as_deref(), Some("true"));
}

#[tokio::test]
async fn remote_free_record_never_downgrades_local_pro() {
    let store = Arc::new(InMemoryEntitlementStore::new());
    seed(
        &store,
        &[(keys::IS_PRO, "true"), (keys::USER_ID, user().as_str())],
    )
    .await;
    let remote = Arc::new(InMemorySubscriptionRemote::new());
    remote.seed(SubscriptionRecord {
        user_id: user(),
        is_pro: false,
        upgraded_at: None,
    });
    let gate = gate(production_limits(), store.clone(), remote);

    let state = gate.load().await.unwrap();
    assert_eq!(state.plan, PlanTier::Pro);
    assert_eq!(store.get(keys::IS_PRO).await.unwrap().as_deref(), Some("true"));
}

#[tokio::test]
async fn absent_remote_record_keeps_local_pro() {
    let store = Arc::new(InMemoryEntitlementStore::new());
    seed(
        &store,
        &[(keys::IS_PRO, "true"), (keys::USER_ID, user().as_str())],
    )
    .await;
    let remote = Arc::new(InMemorySubscriptionRemote::new());
    let gate = gate(production_limits(), store, remote);

    assert_eq!(gate.load().await.unwrap().plan, PlanTier::Pro);
}

#[tokio::test]
async fn remote_lookup_failure_is_absorbed() {
    init_tracing();
    let store = Arc::new(InMemoryEntitlementStore::new());
    seed(
        &store,
        &[(keys::USER_ID, user().as_str()), (keys::LEAD_COUNT, "2")],
    )
    .await;
    let remote = Arc::new(InMemorySubscriptionRemote::new());
    remote.fail_fetches();
    let gate = gate(production_limits(), store, remote.clone());

    // load() must not propagate the network failure.
    let state = gate.load().await.unwrap();
    assert_eq!(state.plan, PlanTier::Free);
    assert_eq!(state.lead_count, 2);
    assert_eq!(remote.fetch_calls(), 1);
}

#[tokio::test]
async fn signed_out_installation_skips_the_remote() {
    let store = Arc::new(InMemoryEntitlementStore::new());
    let remote = Arc::new(InMemorySubscriptionRemote::new());
    let gate = gate(production_limits(), store, remote.clone());

    gate.load().await.unwrap();
    assert_eq!(remote.fetch_calls(), 0);
}

// =============================================================================
// Optimistic Upgrade
// =============================================================================

#[tokio::test]
async fn upgrade_survives_a_failed_remote_upsert() {
    init_tracing();
    let store = Arc::new(InMemoryEntitlementStore::new());
    let remote = Arc::new(InMemorySubscriptionRemote::new());
    let gate = gate(production_limits(), store.clone(), remote.clone());

    gate.load().await.unwrap();
    gate.cache_user_id(&user()).await.unwrap();
    remote.fail_upserts();

    gate.upgrade_to_pro().await.unwrap();
    assert_eq!(gate.snapshot().plan, PlanTier::Pro);
    assert_eq!(remote.upsert_calls(), 1);

    // A fresh gate reading the same store still sees the grant.
    let reloaded = EntitlementGate::new(
        production_limits(),
        store,
        Arc::new(InMemorySubscriptionRemote::new()),
    );
    assert_eq!(reloaded.load().await.unwrap().plan, PlanTier::Pro);
}

#[tokio::test]
async fn upgrade_writes_a_stamped_remote_record() {
    let store = Arc::new(InMemoryEntitlementStore::new());
    let remote = Arc::new(InMemorySubscriptionRemote::new());
    let gate = gate(production_limits(), store, remote.clone());

    gate.load().await.unwrap();
    gate.cache_user_id(&user()).await.unwrap();
    gate.upgrade_to_pro().await.unwrap();

    let record = remote.record(&user()).expect("record was upserted");
    assert!(record.is_pro);
    assert!(record.upgraded_at.is_some());
}

#[tokio::test]
async fn upgrade_without_identity_stays_local() {
    let store = Arc::new(InMemoryEntitlementStore::new());
    let remote = Arc::new(InMemorySubscriptionRemote::new());
    let gate = gate(production_limits(), store, remote.clone());

    gate.load().await.unwrap();
    gate.upgrade_to_pro().await.unwrap();

    assert_eq!(gate.snapshot().plan, PlanTier::Pro);
    assert_eq!(remote.upsert_calls(), 0);
}

// =============================================================================
// Durable Storage (process restart)
// =============================================================================

#[tokio::test]
async fn file_backed_state_survives_restart() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("entitlements.json");

    {
        let store = Arc::new(JsonFileStore::new(&path));
        let gate = gate(
            production_limits(),
            store,
            Arc::new(InMemorySubscriptionRemote::new()),
        );
        gate.load().await.unwrap();
        gate.increment_lead_count().await.unwrap();
        gate.increment_lead_count().await.unwrap();
        gate.upgrade_to_pro().await.unwrap();
    }

    // New store and gate over the same file, as after an app restart.
    let store = Arc::new(JsonFileStore::new(&path));
    let gate = gate(
        production_limits(),
        store,
        Arc::new(InMemorySubscriptionRemote::new()),
    );
    let state = gate.load().await.unwrap();

    assert_eq!(state.plan, PlanTier::Pro);
    assert_eq!(state.lead_count, 2);
}
