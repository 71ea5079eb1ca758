//! Script domain - canned sales scripts, objection handling, templating.

mod script;
mod template;

pub use script::{Objection, Script, ScriptCategory};
pub use template::ScriptTemplate;
