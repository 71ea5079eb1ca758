//! Lead domain - prospects, funnel status, and temperature scoring.

mod lead;
mod status;
mod temperature;

pub use lead::{Lead, LeadSource};
pub use status::LeadStatus;
pub use temperature::{priority_from_score, LeadTemperature};
