//! ScriptCatalog port - the hosted script and objection library.
//!
//! Read-mostly: the client lists scripts and searches objection responses,
//! and reports copy events back for popularity ranking. Copy tracking is
//! analytics, not entitlement; implementations accept it best-effort.

use async_trait::async_trait;

use crate::domain::foundation::{ScriptId, UserId};
use crate::domain::script::{Objection, Script, ScriptCategory};

/// Filter for script listings.
#[derive(Debug, Clone, Default)]
pub struct ScriptFilter {
    /// Restrict to one company/vertical (generic scripts always match).
    pub company: Option<String>,
    /// Restrict to one category.
    pub category: Option<ScriptCategory>,
}

impl ScriptFilter {
    /// Whether a script passes this filter.
    pub fn accepts(&self, script: &Script) -> bool {
        if let Some(company) = &self.company {
            if !script.matches_company(company) {
                return false;
            }
        }
        if let Some(category) = self.category {
            if script.category != category {
                return false;
            }
        }
        true
    }
}

/// Errors from the script catalog.
#[derive(Debug, thiserror::Error)]
pub enum ScriptCatalogError {
    /// Could not reach the backend at all.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("catalog error ({status}): {message}")]
    Backend { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
}

/// Port for the script and objection library.
#[async_trait]
pub trait ScriptCatalog: Send + Sync {
    /// Lists scripts matching the filter, most useful first.
    async fn list_scripts(&self, filter: &ScriptFilter) -> Result<Vec<Script>, ScriptCatalogError>;

    /// Searches objection responses. No term lists everything.
    async fn search_objections(
        &self,
        term: Option<&str>,
    ) -> Result<Vec<Objection>, ScriptCatalogError>;

    /// Records that a script was copied, with the rendered text when
    /// available.
    async fn record_copy(
        &self,
        script_id: &ScriptId,
        user_id: Option<&UserId>,
        final_text: Option<&str>,
    ) -> Result<(), ScriptCatalogError>;
}
