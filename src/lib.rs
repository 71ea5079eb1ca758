//! SalesFlow Core - Client engine for the SalesFlow sales assistant
//!
//! This crate implements the local, stateful pieces of the app: the
//! entitlement gate with its free-tier quotas and daily rollover, the lead
//! and script domain, and typed clients for the remote scoring pipeline,
//! script library, and sales copilot.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
