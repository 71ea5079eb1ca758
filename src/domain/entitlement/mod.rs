//! Entitlement domain - plan tiers, free-tier quotas, subscription state.
//!
//! # Design Decisions
//!
//! - **Local state is authoritative**: the remote subscription record is an
//!   advisory cache that can only upgrade the plan, never downgrade it and
//!   never touch the counters.
//! - **Pro is absorbing**: no modeled transition returns an installation
//!   from Pro to Free.
//! - **Checks are pure**: quota decisions are synchronous functions of the
//!   in-memory state; mutation and persistence live in the application
//!   layer's gate.

mod limits;
mod plan;
mod state;

pub use limits::{
    FreeTierLimits, DEV_FREE_AI_CALLS_PER_DAY, DEV_FREE_LEAD_LIMIT, FREE_AI_CALLS_PER_DAY,
    FREE_LEAD_LIMIT,
};
pub use plan::PlanTier;
pub use state::{local_calendar_date, SubscriptionState};
