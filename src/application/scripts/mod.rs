//! Script application services.

mod copy_script;

pub use copy_script::{CopiedScript, CopyScriptCommand, CopyScriptHandler};
