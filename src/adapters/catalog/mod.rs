//! Catalog adapters - implementations of the `ScriptCatalog` port.

mod bundled;

pub use bundled::BundledScriptCatalog;
