//! Style definitions for the UI components.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Frame styles
// =============================================================================

/// Title bar across the top of the screen.
pub fn header_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn panel_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

/// Key hints in the status line.
pub fn status_hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// "Waiting for reply" indicator.
pub fn status_pending_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::ITALIC)
}

// =============================================================================
// Message list styles
// =============================================================================

pub fn message_time_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn user_sender_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

pub fn bot_sender_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn message_text_style() -> Style {
    Style::default().fg(Color::White)
}

/// Keyword emphasis inside bot replies.
pub fn keyword_highlight_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

pub fn list_bullet_style() -> Style {
    Style::default().fg(Color::Cyan)
}

// =============================================================================
// Input styles
// =============================================================================

pub fn input_prompt_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn input_text_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn input_placeholder_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_highlight_is_bold_yellow() {
        let style = keyword_highlight_style();
        assert_eq!(style.fg, Some(Color::Yellow));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn highlight_differs_from_plain_text() {
        assert_ne!(keyword_highlight_style(), message_text_style());
    }

    #[test]
    fn senders_are_distinguishable() {
        assert_ne!(user_sender_style().fg, bot_sender_style().fg);
    }

    #[test]
    fn placeholder_is_dimmed() {
        assert_eq!(input_placeholder_style().fg, Some(Color::DarkGray));
    }
}
