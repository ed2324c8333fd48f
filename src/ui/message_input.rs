//! Question input field rendering.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::domain::composer::ComposerState;

use super::styles;

/// Placeholder text shown while the input is empty.
const PLACEHOLDER_TEXT: &str = "Type a legal question...";

/// Prompt symbol shown before the input text.
const PROMPT_SYMBOL: &str = "> ";

/// Renders the input field and places the terminal cursor in it.
pub fn render_message_input(frame: &mut Frame<'_>, area: Rect, composer: &ComposerState) {
    let inner_width = usize::from(area.width.saturating_sub(2));
    let text_width = inner_width.saturating_sub(PROMPT_SYMBOL.len());
    let skipped_columns = horizontal_offset(composer.cursor_column(), text_width);

    let paragraph = Paragraph::new(build_input_line(composer, skipped_columns)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles::panel_border_style()),
    );

    frame.render_widget(paragraph, area);

    let visible_cursor = composer.cursor_column().saturating_sub(skipped_columns);
    let cursor_x = area
        .x
        .saturating_add(1)
        .saturating_add(PROMPT_SYMBOL.len() as u16)
        .saturating_add(visible_cursor.min(u16::MAX as usize) as u16);
    let cursor_y = area.y.saturating_add(1);
    frame.set_cursor_position((cursor_x, cursor_y));
}

/// Columns to hide on the left so the cursor stays inside the field.
fn horizontal_offset(cursor_column: usize, text_width: usize) -> usize {
    if text_width == 0 {
        return cursor_column;
    }
    (cursor_column + 1).saturating_sub(text_width)
}

fn build_input_line(composer: &ComposerState, skipped_columns: usize) -> Line<'static> {
    let prompt = Span::styled(PROMPT_SYMBOL.to_owned(), styles::input_prompt_style());

    if composer.is_empty() {
        return Line::from(vec![
            prompt,
            Span::styled(
                PLACEHOLDER_TEXT.to_owned(),
                styles::input_placeholder_style(),
            ),
        ]);
    }

    Line::from(vec![
        prompt,
        Span::styled(
            skip_columns(composer.text(), skipped_columns),
            styles::input_text_style(),
        ),
    ])
}

fn skip_columns(text: &str, columns: usize) -> String {
    let mut skipped = 0;
    text.chars()
        .skip_while(|ch| {
            if skipped >= columns {
                return false;
            }
            skipped += ch.width().unwrap_or(0);
            true
        })
        .collect()
}
