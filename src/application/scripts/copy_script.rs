//! CopyScriptHandler - render a script and report the copy event.
//!
//! Rendering substitutes the user's placeholder values; anything left blank
//! stays visible as `[Placeholder]` in the copied text. The copy event is
//! analytics and is reported best-effort: a tracking failure must never
//! break the copy itself.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::foundation::{ScriptId, UserId};
use crate::domain::script::Script;
use crate::ports::ScriptCatalog;

/// Command to render and copy a script.
#[derive(Debug, Clone)]
pub struct CopyScriptCommand {
    /// The script being copied.
    pub script: Script,
    /// Placeholder values entered by the user.
    pub values: HashMap<String, String>,
    /// The signed-in account, when known.
    pub user_id: Option<UserId>,
}

/// A rendered script ready for the clipboard.
#[derive(Debug, Clone)]
pub struct CopiedScript {
    pub script_id: ScriptId,
    /// The final text with placeholders substituted.
    pub text: String,
    /// Placeholders the user left blank.
    pub unfilled: Vec<String>,
}

/// Handler for script copies.
pub struct CopyScriptHandler {
    catalog: Arc<dyn ScriptCatalog>,
}

impl CopyScriptHandler {
    pub fn new(catalog: Arc<dyn ScriptCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, command: CopyScriptCommand) -> CopiedScript {
        let template = command.script.template();
        let text = template.render(&command.values);
        let unfilled = template
            .placeholders()
            .into_iter()
            .filter(|name| {
                command
                    .values
                    .get(name)
                    .map(|value| value.is_empty())
                    .unwrap_or(true)
            })
            .collect();

        if let Err(e) = self
            .catalog
            .record_copy(&command.script.id, command.user_id.as_ref(), Some(&text))
            .await
        {
            tracing::warn!(script_id = %command.script.id, error = %e, "copy tracking failed");
        }

        CopiedScript {
            script_id: command.script.id.clone(),
            text,
            unfilled,
        }
    }
}
