//! Lead entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, LeadId, Timestamp, UserId, ValidationError};

use super::LeadStatus;

/// How a lead entered the funnel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadSource {
    Linkedin,
    Facebook,
    Instagram,
    WebForm,
    WebScrape,
    Manual,
    Import,
    Referral,
    Chat,
    Whatsapp,
}

impl LeadSource {
    /// Returns the display name for this source.
    pub fn display_name(&self) -> &'static str {
        match self {
            LeadSource::Linkedin => "LinkedIn",
            LeadSource::Facebook => "Facebook",
            LeadSource::Instagram => "Instagram",
            LeadSource::WebForm => "Web form",
            LeadSource::WebScrape => "Web scrape",
            LeadSource::Manual => "Manual",
            LeadSource::Import => "Import",
            LeadSource::Referral => "Referral",
            LeadSource::Chat => "Chat",
            LeadSource::Whatsapp => "WhatsApp",
        }
    }
}

/// A prospect the user is working.
///
/// Contact details are optional: a lead captured from a chat may start as
/// nothing but a name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    /// Unique identifier for this lead.
    pub id: LeadId,

    /// User who owns this lead.
    pub user_id: UserId,

    /// Prospect display name.
    pub name: String,

    /// Phone number, if known.
    pub phone: Option<String>,

    /// Email address, if known.
    pub email: Option<String>,

    /// Current funnel status.
    pub status: LeadStatus,

    /// Acquisition channel.
    pub source: LeadSource,

    /// Free-form notes.
    pub notes: Option<String>,

    /// When the lead was captured.
    pub created_at: Timestamp,

    /// When the lead was last modified.
    pub updated_at: Option<Timestamp>,
}

impl Lead {
    /// Creates a new lead in the `New` status.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `name` is empty.
    pub fn new(
        id: LeadId,
        user_id: UserId,
        name: impl Into<String>,
        source: LeadSource,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name").into());
        }
        Ok(Self {
            id,
            user_id,
            name,
            phone: None,
            email: None,
            status: LeadStatus::New,
            source,
            notes: None,
            created_at: Timestamp::now(),
            updated_at: None,
        })
    }

    /// Attaches contact details.
    pub fn with_contact(mut self, phone: Option<String>, email: Option<String>) -> Self {
        self.phone = phone;
        self.email = email;
        self
    }

    /// Moves the lead to a new funnel status and stamps the update time.
    pub fn set_status(&mut self, status: LeadStatus) {
        self.status = status;
        self.updated_at = Some(Timestamp::now());
    }

    /// Replaces the notes and stamps the update time.
    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = Some(notes.into());
        self.updated_at = Some(Timestamp::now());
    }
}
