//! State of the question input line.

use unicode_width::UnicodeWidthStr;

/// Text being composed plus a character-indexed cursor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComposerState {
    text: String,
    cursor: usize,
}

impl ComposerState {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position as a character index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Terminal columns occupied by the text left of the cursor.
    pub fn cursor_column(&self) -> usize {
        let byte_idx = self.byte_index(self.cursor);
        self.text[..byte_idx].width()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// True when there is nothing worth sending.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Inserts `ch` at the cursor.
    pub fn insert_char(&mut self, ch: char) {
        let byte_idx = self.byte_index(self.cursor);
        self.text.insert(byte_idx, ch);
        self.cursor += 1;
    }

    /// Backspace.
    pub fn delete_before_cursor(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.remove_at_cursor();
    }

    /// Delete key.
    pub fn delete_at_cursor(&mut self) {
        if self.cursor < self.char_count() {
            self.remove_at_cursor();
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Takes the composed text for sending and resets the line.
    ///
    /// Returns `None` and leaves the line untouched when the text is blank.
    /// The returned text is exactly what was typed, surrounding whitespace
    /// included.
    pub fn take_submission(&mut self) -> Option<String> {
        if self.is_blank() {
            return None;
        }
        self.cursor = 0;
        Some(std::mem::take(&mut self.text))
    }

    fn remove_at_cursor(&mut self) {
        let start = self.byte_index(self.cursor);
        let end = self.byte_index(self.cursor + 1);
        self.text.drain(start..end);
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(byte_idx, _)| byte_idx)
            .unwrap_or(self.text.len())
    }
}
