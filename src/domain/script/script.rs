//! Catalog entry types: sales scripts and objection responses.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::foundation::ScriptId;

use super::ScriptTemplate;

/// What a script is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptCategory {
    Opener,
    Followup,
    Objection,
    Closing,
    General,
}

impl ScriptCategory {
    /// Returns the display name for this category.
    pub fn display_name(&self) -> &'static str {
        match self {
            ScriptCategory::Opener => "Opener",
            ScriptCategory::Followup => "Follow-up",
            ScriptCategory::Objection => "Objection",
            ScriptCategory::Closing => "Closing",
            ScriptCategory::General => "General",
        }
    }
}

impl FromStr for ScriptCategory {
    type Err = std::convert::Infallible;

    /// Backend rows carry free-form category strings; anything unknown
    /// lands in `General`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "opener" => ScriptCategory::Opener,
            "followup" | "follow-up" => ScriptCategory::Followup,
            "objection" => ScriptCategory::Objection,
            "closing" => ScriptCategory::Closing,
            _ => ScriptCategory::General,
        })
    }
}

/// A canned sales script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    /// Catalog identifier.
    pub id: ScriptId,

    /// Short title shown in lists.
    pub title: String,

    /// The message text, possibly containing `[Placeholder]` variables.
    pub content: String,

    /// Purpose of the script.
    pub category: ScriptCategory,

    /// Company/vertical the script targets, `"GENERAL"` if unspecific.
    pub company: String,

    /// Suggested delivery tone, free-form.
    pub tone: Option<String>,

    /// Search tags.
    pub tags: Vec<String>,

    /// How often users copied this script.
    pub copied_count: u32,
}

impl Script {
    /// The script content as a renderable template.
    pub fn template(&self) -> ScriptTemplate {
        ScriptTemplate::new(self.content.clone())
    }

    /// Whether this script targets the given company (or is generic).
    pub fn matches_company(&self, company: &str) -> bool {
        self.company.eq_ignore_ascii_case(company) || self.company.eq_ignore_ascii_case("GENERAL")
    }
}

/// A rebuttal for a common objection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Objection {
    /// Catalog identifier.
    pub id: ScriptId,

    /// The objection as the prospect voices it.
    pub objection: String,

    /// The suggested response script.
    pub response: String,

    /// Named handling technique (reframe, isolate, ...).
    pub technique: Option<String>,

    /// Guidance on when this response fits.
    pub when_to_use: Option<String>,

    /// Suggested delivery tone.
    pub tone: Option<String>,

    /// Reported success rate, free-form (e.g. "68%").
    pub success_rate: Option<String>,
}

impl Objection {
    /// Case-insensitive match against objection text, response, and
    /// technique.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.objection.to_lowercase().contains(&term)
            || self.response.to_lowercase().contains(&term)
            || self
                .technique
                .as_deref()
                .map(|t| t.to_lowercase().contains(&term))
                .unwrap_or(false)
    }
}
