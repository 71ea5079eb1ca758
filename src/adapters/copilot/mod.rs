//! Copilot adapters - implementations of the `SalesCopilot` port.

mod http;

pub use http::{CopilotApiConfig, HttpSalesCopilot};
