//! Chat service integration: HTTP client and wire types.

mod client;
mod wire;

pub use client::HttpChatBackend;

/// Returns the api module name for smoke checks.
pub fn module_name() -> &'static str {
    "api"
}
