//! Lead temperature bucketing.
//!
//! The scoring pipeline computes a priority score (p-score, 0-100) and a
//! verification score (v-score, 0-100) server-side; the client only buckets
//! them for display and sorting. This is the one piece of scoring logic the
//! client owns.

use serde::{Deserialize, Serialize};

/// Display bucket derived from pipeline scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadTemperature {
    /// High priority and the contact data checked out.
    HotVerified,
    /// High priority, verification pending or weak.
    Hot,
    Warm,
    Cool,
    Cold,
}

impl LeadTemperature {
    /// Buckets a lead from its priority score and (optional) verification
    /// score.
    ///
    /// | p-score | v-score | temperature |
    /// |---------|---------|-------------|
    /// | >= 80 | >= 70 | hot_verified |
    /// | >= 80 | any | hot |
    /// | >= 60 | any | warm |
    /// | >= 40 | any | cool |
    /// | < 40 | any | cold |
    pub fn from_scores(p_score: u32, v_score: Option<u32>) -> Self {
        if p_score >= 80 && v_score.unwrap_or(0) >= 70 {
            LeadTemperature::HotVerified
        } else if p_score >= 80 {
            LeadTemperature::Hot
        } else if p_score >= 60 {
            LeadTemperature::Warm
        } else if p_score >= 40 {
            LeadTemperature::Cool
        } else {
            LeadTemperature::Cold
        }
    }

    /// Returns true for the buckets that warrant immediate outreach.
    pub fn is_hot(&self) -> bool {
        matches!(self, LeadTemperature::HotVerified | LeadTemperature::Hot)
    }
}

/// Maps a priority score to the 1-5 priority used for list ordering.
pub fn priority_from_score(p_score: u32) -> u8 {
    match p_score {
        80.. => 5,
        60..=79 => 4,
        40..=59 => 3,
        20..=39 => 2,
        _ => 1,
    }
}
