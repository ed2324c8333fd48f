use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{formatting::KeywordSet, shell_state::ShellState};

use super::message_input::render_message_input;
use super::message_rendering::conversation_lines;
use super::styles;

pub const APP_TITLE: &str = "Judiciary Chatbot";

const KEY_HINTS: &str = "Enter send | PgUp/PgDn scroll | Ctrl+U clear | Esc quit";

pub fn render(frame: &mut Frame<'_>, state: &mut ShellState, keywords: &KeywordSet) {
    // Input takes 3 lines: 1 border + 1 text + 1 border
    let [header_area, messages_area, input_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    let header = Paragraph::new(Line::from(Span::styled(APP_TITLE, styles::header_style())))
        .alignment(Alignment::Center)
        .style(styles::header_style());
    frame.render_widget(header, header_area);

    render_messages_panel(frame, messages_area, state, keywords);
    render_message_input(frame, input_area, state.composer());

    let status = Paragraph::new(status_line(state));
    frame.render_widget(status, status_area);
}

fn render_messages_panel(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &mut ShellState,
    keywords: &KeywordSet,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::panel_border_style());
    let inner = block.inner(area);

    let lines = conversation_lines(
        state.conversation().messages(),
        keywords,
        usize::from(inner.width),
    );
    let offset = scroll_offset(lines.len(), inner.height, state);

    let panel = Paragraph::new(lines).block(block).scroll((offset, 0));
    frame.render_widget(panel, area);
}

/// Top line to show so the newest message sits at the bottom, shifted up by
/// the user's scroll-back.
fn scroll_offset(total_lines: usize, visible_lines: u16, state: &mut ShellState) -> u16 {
    let max_offset = total_lines
        .saturating_sub(usize::from(visible_lines))
        .min(usize::from(u16::MAX)) as u16;
    state.clamp_scroll(max_offset);
    max_offset - state.scroll_from_bottom()
}

fn status_line(state: &ShellState) -> Line<'static> {
    let mut spans = Vec::new();

    match state.pending_replies() {
        0 => {}
        1 => spans.push(Span::styled(
            "Waiting for reply… ",
            styles::status_pending_style(),
        )),
        pending => spans.push(Span::styled(
            format!("Waiting for {pending} replies… "),
            styles::status_pending_style(),
        )),
    }

    spans.push(Span::styled(KEY_HINTS, styles::status_hint_style()));
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::domain::conversation::Conversation;

    fn keywords() -> KeywordSet {
        KeywordSet::new(["fine", "court"]).expect("keywords compile")
    }

    fn draw(state: &mut ShellState, width: u16, height: u16) -> Vec<String> {
        let mut terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test terminal must build");
        let keywords = keywords();
        terminal
            .draw(|frame| render(frame, state, &keywords))
            .expect("frame must draw");

        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn renders_title_greeting_and_placeholder() {
        let mut state =
            ShellState::new(Conversation::with_greeting("Hi there! How can I help you?"));

        let rows = draw(&mut state, 60, 12);
        let screen = rows.join("\n");

        assert!(rows[0].contains(APP_TITLE));
        assert!(screen.contains("Hi there! How can I help you?"));
        assert!(screen.contains("Type a legal question..."));
    }

    #[test]
    fn newest_message_stays_visible() {
        let mut state = ShellState::new(Conversation::default());
        for index in 0..20 {
            state.record_sent(format!("question {index}"));
            state.record_reply(format!("answer {index}"));
        }

        let screen = draw(&mut state, 40, 14).join("\n");

        assert!(screen.contains("answer 19"));
        assert!(!screen.contains("question 0 "));
    }

    #[test]
    fn scrolling_back_reveals_older_messages() {
        let mut state = ShellState::new(Conversation::default());
        for index in 0..20 {
            state.record_sent(format!("question {index}"));
            state.record_reply(format!("answer {index}"));
        }
        for _ in 0..50 {
            state.scroll_up();
        }

        let screen = draw(&mut state, 40, 14).join("\n");

        assert!(screen.contains("question 0"));
        assert!(!screen.contains("answer 19"));
    }

    #[test]
    fn scroll_offset_clamps_to_content() {
        let mut state = ShellState::default();
        state.scroll_up();

        assert_eq!(scroll_offset(5, 10, &mut state), 0);
        assert_eq!(state.scroll_from_bottom(), 0);

        assert_eq!(scroll_offset(30, 10, &mut state), 20);
    }

    #[test]
    fn status_line_shows_pending_indicator() {
        let mut state = ShellState::default();
        assert!(!line_text(&status_line(&state)).contains("Waiting"));

        state.record_sent("one".to_owned());
        assert!(line_text(&status_line(&state)).starts_with("Waiting for reply"));

        state.record_sent("two".to_owned());
        assert!(line_text(&status_line(&state)).starts_with("Waiting for 2 replies"));
    }
}
