//! Domain layer: conversation entities and reply formatting rules.

pub mod composer;
pub mod conversation;
pub mod events;
pub mod formatting;
pub mod message;
pub mod shell_state;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
