#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Tick,
    QuitRequested,
    InputKey(KeyInput),
    /// A chat request resolved; carries the text to show as the bot reply.
    BotReplied(String),
}

/// A key press in a backend-neutral form.
///
/// Printable characters are carried as themselves; named keys use lowercase
/// names such as `"enter"`, `"backspace"` or `"pageup"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>, ctrl: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
        }
    }

    /// The typed character, when the key is a single printable one.
    pub fn as_char(&self) -> Option<char> {
        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if !self.ctrl && !ch.is_control() => Some(ch),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_character_keys_are_printable() {
        assert_eq!(KeyInput::new("a", false).as_char(), Some('a'));
        assert_eq!(KeyInput::new("§", false).as_char(), Some('§'));
    }

    #[test]
    fn named_and_ctrl_keys_are_not_printable() {
        assert_eq!(KeyInput::new("enter", false).as_char(), None);
        assert_eq!(KeyInput::new("u", true).as_char(), None);
    }
}
