//! Entitlement application service - the gate.

mod gate;

pub use gate::EntitlementGate;
