//! Storage adapters - implementations of the `EntitlementStore` port.

mod in_memory;
mod json_file;

pub use in_memory::InMemoryEntitlementStore;
pub use json_file::JsonFileStore;
