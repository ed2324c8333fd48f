use super::{composer::ComposerState, conversation::Conversation, message::Message};

/// Number of lines a PageUp/PageDown press scrolls the message panel.
const SCROLL_PAGE_LINES: u16 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    running: bool,
    conversation: Conversation,
    composer: ComposerState,
    pending_replies: usize,
    /// Lines scrolled up from the newest message; 0 follows the bottom.
    scroll_from_bottom: u16,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new(Conversation::default())
    }
}

impl ShellState {
    pub fn new(conversation: Conversation) -> Self {
        Self {
            running: true,
            conversation,
            composer: ComposerState::default(),
            pending_replies: 0,
            scroll_from_bottom: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn composer(&self) -> &ComposerState {
        &self.composer
    }

    pub fn composer_mut(&mut self) -> &mut ComposerState {
        &mut self.composer
    }

    /// Appends the user's question and marks a reply as outstanding.
    pub fn record_sent(&mut self, text: String) {
        self.conversation.push(Message::user(text));
        self.pending_replies += 1;
        self.scroll_from_bottom = 0;
    }

    /// Appends a bot reply and settles one outstanding request.
    pub fn record_reply(&mut self, text: String) {
        self.conversation.push(Message::bot(text));
        self.pending_replies = self.pending_replies.saturating_sub(1);
        self.scroll_from_bottom = 0;
    }

    pub fn pending_replies(&self) -> usize {
        self.pending_replies
    }

    pub fn is_waiting_for_reply(&self) -> bool {
        self.pending_replies > 0
    }

    pub fn scroll_from_bottom(&self) -> u16 {
        self.scroll_from_bottom
    }

    pub fn scroll_up(&mut self) {
        self.scroll_from_bottom = self.scroll_from_bottom.saturating_add(SCROLL_PAGE_LINES);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_from_bottom = self.scroll_from_bottom.saturating_sub(SCROLL_PAGE_LINES);
    }

    /// Caps the scroll offset once the renderer knows how far back it can go.
    pub fn clamp_scroll(&mut self, max_from_bottom: u16) {
        self.scroll_from_bottom = self.scroll_from_bottom.min(max_from_bottom);
    }
}
