//! Lead conversation status.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Where a lead currently sits in the conversation funnel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeadStatus {
    /// Freshly captured, no conversation yet.
    New,
    /// An active back-and-forth is happening.
    Conversation,
    /// Close attempt in progress.
    Closing,
    /// The lead stopped responding.
    Ghosting,
}

impl LeadStatus {
    /// Returns the display name for this status.
    pub fn display_name(&self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Conversation => "Conversation",
            LeadStatus::Closing => "Closing",
            LeadStatus::Ghosting => "Ghosting",
        }
    }

    /// Wire representation used by the backend tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "NEW",
            LeadStatus::Conversation => "CONVERSATION",
            LeadStatus::Closing => "CLOSING",
            LeadStatus::Ghosting => "GHOSTING",
        }
    }
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for LeadStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NEW" => Ok(LeadStatus::New),
            "CONVERSATION" => Ok(LeadStatus::Conversation),
            "CLOSING" => Ok(LeadStatus::Closing),
            "GHOSTING" => Ok(LeadStatus::Ghosting),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown lead status '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_screaming_snake() {
        let json = serde_json::to_string(&LeadStatus::Conversation).unwrap();
        assert_eq!(json, "\"CONVERSATION\"");
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("ghosting".parse::<LeadStatus>().unwrap(), LeadStatus::Ghosting);
        assert_eq!("NEW".parse::<LeadStatus>().unwrap(), LeadStatus::New);
    }

    #[test]
    fn rejects_unknown_status() {
        assert!("ARCHIVED".parse::<LeadStatus>().is_err());
    }

    #[test]
    fn wire_and_parse_round_trip() {
        for status in [
            LeadStatus::New,
            LeadStatus::Conversation,
            LeadStatus::Closing,
            LeadStatus::Ghosting,
        ] {
            assert_eq!(status.as_str().parse::<LeadStatus>().unwrap(), status);
        }
    }
}
