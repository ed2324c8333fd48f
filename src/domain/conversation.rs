//! The ordered message list shown in the chat panel.

use super::message::Message;

/// Append-only ordered list of messages for the current session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Starts a conversation with the bot greeting, if any.
    pub fn with_greeting(greeting: &str) -> Self {
        let mut conversation = Self::default();
        if !greeting.trim().is_empty() {
            conversation.push(Message::bot(greeting));
        }
        conversation
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
