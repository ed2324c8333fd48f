use anyhow::Result;

use crate::domain::{events::AppEvent, shell_state::ShellState};

pub trait AppEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>>;
}

pub trait ShellOrchestrator {
    fn state(&self) -> &ShellState;
    fn state_mut(&mut self) -> &mut ShellState;
    fn handle_event(&mut self, event: AppEvent) -> Result<()>;
}

/// Starts a chat request without waiting for it.
///
/// The outcome arrives later as exactly one `AppEvent::BotReplied`.
pub trait ReplyDispatcher {
    fn dispatch(&self, text: String);
}

impl<T: ReplyDispatcher + ?Sized> ReplyDispatcher for &T {
    fn dispatch(&self, text: String) {
        (*self).dispatch(text)
    }
}
