use anyhow::Result;

use crate::domain::{
    events::{AppEvent, KeyInput},
    shell_state::ShellState,
};

use super::contracts::{ReplyDispatcher, ShellOrchestrator};

pub struct DefaultShellOrchestrator<D>
where
    D: ReplyDispatcher,
{
    state: ShellState,
    dispatcher: D,
}

impl<D> DefaultShellOrchestrator<D>
where
    D: ReplyDispatcher,
{
    pub fn new(state: ShellState, dispatcher: D) -> Self {
        Self { state, dispatcher }
    }

    fn handle_key(&mut self, key: KeyInput) {
        if key.ctrl {
            match key.key.as_str() {
                "c" => self.state.stop(),
                "u" => self.state.composer_mut().clear(),
                _ => {}
            }
            return;
        }

        if let Some(ch) = key.as_char() {
            self.state.composer_mut().insert_char(ch);
            return;
        }

        match key.key.as_str() {
            "enter" => self.submit(),
            "esc" => self.state.stop(),
            "backspace" => self.state.composer_mut().delete_before_cursor(),
            "delete" => self.state.composer_mut().delete_at_cursor(),
            "left" => self.state.composer_mut().move_left(),
            "right" => self.state.composer_mut().move_right(),
            "home" => self.state.composer_mut().move_home(),
            "end" => self.state.composer_mut().move_end(),
            "pageup" => self.state.scroll_up(),
            "pagedown" => self.state.scroll_down(),
            _ => {}
        }
    }

    fn submit(&mut self) {
        let Some(text) = self.state.composer_mut().take_submission() else {
            return;
        };

        tracing::debug!(
            chars = text.chars().count(),
            pending = self.state.pending_replies() + 1,
            "dispatching chat message"
        );
        self.state.record_sent(text.clone());
        self.dispatcher.dispatch(text);
    }
}

impl<D> ShellOrchestrator for DefaultShellOrchestrator<D>
where
    D: ReplyDispatcher,
{
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ShellState {
        &mut self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => {}
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(key) => self.handle_key(key),
            AppEvent::BotReplied(text) => {
                tracing::debug!(chars = text.chars().count(), "bot reply appended");
                self.state.record_reply(text);
            }
        }

        Ok(())
    }
}
