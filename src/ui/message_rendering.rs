//! Conversation rendering logic.
//!
//! Turns the message list into wrapped, styled terminal lines:
//! - a header line per message (time + sender)
//! - user text shown as typed
//! - bot replies run through the formatter: paragraphs separated by a
//!   blank line, lists as bulleted items, keywords emphasized
//!
//! Wrapping is done here rather than by the widget so the view knows the
//! exact line count when it pins the panel to the newest message.

use chrono::{Local, TimeZone};
use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::{
    formatting::{self, DisplayBlock, KeywordSet},
    message::{Message, Sender},
};

use super::styles;

const BODY_INDENT: &str = "      ";
const LIST_BULLET: &str = "• ";
const LIST_HANGING_INDENT: &str = "  ";
const TAB_AS_SPACES: &str = "    ";
const EMPTY_MESSAGE_LABEL: &str = "[Empty message]";

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Segment {
    text: String,
    style: Style,
}

impl Segment {
    fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

type Row = Vec<Segment>;

/// Builds every display line for `messages`, wrapped to `width` columns.
pub fn conversation_lines(
    messages: &[Message],
    keywords: &KeywordSet,
    width: usize,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (index, message) in messages.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        lines.push(header_line(message));
        lines.extend(
            body_rows(message, keywords, width.saturating_sub(BODY_INDENT.width()))
                .into_iter()
                .map(|row| row_to_line(BODY_INDENT, row)),
        );
    }

    lines
}

fn header_line(message: &Message) -> Line<'static> {
    let sender_style = match message.sender {
        Sender::User => styles::user_sender_style(),
        Sender::Bot => styles::bot_sender_style(),
    };

    Line::from(vec![
        Span::styled(
            format!("{:>5} ", format_time(message.timestamp_ms)),
            styles::message_time_style(),
        ),
        Span::styled(format!("{}:", message.sender.display_label()), sender_style),
    ])
}

fn body_rows(message: &Message, keywords: &KeywordSet, width: usize) -> Vec<Row> {
    let mut rows = Vec::new();

    if message.is_formatted() {
        for (index, block) in formatting::format(&message.text, keywords)
            .iter()
            .enumerate()
        {
            if index > 0 {
                rows.push(Row::new());
            }
            rows.extend(block_rows(block, width));
        }
    } else if !message.text.trim().is_empty() {
        let segments = [Segment::new(
            message.text.clone(),
            styles::message_text_style(),
        )];
        rows.extend(text_rows(&segments, width));
    }

    if rows.is_empty() {
        rows.push(vec![Segment::new(
            EMPTY_MESSAGE_LABEL,
            styles::message_time_style(),
        )]);
    }

    rows
}

fn block_rows(block: &DisplayBlock, width: usize) -> Vec<Row> {
    match block {
        DisplayBlock::Paragraph(spans) => text_rows(&formatted_segments(spans), width),
        DisplayBlock::List(items) => {
            let item_width = width.saturating_sub(LIST_BULLET.width());
            let mut rows = Vec::new();

            for item in items {
                for (line_index, row) in text_rows(&formatted_segments(&item.spans), item_width)
                    .into_iter()
                    .enumerate()
                {
                    let prefix = if line_index == 0 {
                        Segment::new(LIST_BULLET, styles::list_bullet_style())
                    } else {
                        Segment::new(LIST_HANGING_INDENT, styles::message_text_style())
                    };
                    let mut prefixed = vec![prefix];
                    prefixed.extend(row);
                    rows.push(prefixed);
                }
            }

            rows
        }
    }
}

fn formatted_segments(spans: &[formatting::Span]) -> Vec<Segment> {
    spans
        .iter()
        .map(|span| {
            let style = if span.highlighted {
                styles::keyword_highlight_style()
            } else {
                styles::message_text_style()
            };
            Segment::new(span.text.clone(), style)
        })
        .collect()
}

/// Honors embedded newlines, then wraps each line.
fn text_rows(segments: &[Segment], width: usize) -> Vec<Row> {
    split_at_newlines(segments)
        .iter()
        .flat_map(|line| wrap_row(line, width))
        .collect()
}

fn split_at_newlines(segments: &[Segment]) -> Vec<Row> {
    let mut lines = vec![Row::new()];

    for segment in segments {
        for (index, piece) in segment.text.split('\n').enumerate() {
            if index > 0 {
                lines.push(Row::new());
            }
            let piece = piece.strip_suffix('\r').unwrap_or(piece);
            if piece.is_empty() {
                continue;
            }
            if let Some(line) = lines.last_mut() {
                push_text(line, &piece.replace('\t', TAB_AS_SPACES), segment.style);
            }
        }
    }

    lines
}

/// A whitespace run or a word; a word may span several styles.
struct Word {
    pieces: Row,
    width: usize,
    is_space: bool,
}

fn words(segments: &[Segment]) -> Vec<Word> {
    let mut words: Vec<Word> = Vec::new();

    for segment in segments {
        for run in whitespace_runs(&segment.text) {
            let is_space = run.starts_with(char::is_whitespace);
            match words.last_mut() {
                Some(last) if last.is_space == is_space => {
                    push_text(&mut last.pieces, run, segment.style);
                    last.width += run.width();
                }
                _ => words.push(Word {
                    pieces: vec![Segment::new(run, segment.style)],
                    width: run.width(),
                    is_space,
                }),
            }
        }
    }

    words
}

fn whitespace_runs(text: &str) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut previous: Option<bool> = None;

    for (index, ch) in text.char_indices() {
        let is_space = ch.is_whitespace();
        if previous.is_some_and(|was_space| was_space != is_space) {
            runs.push(&text[start..index]);
            start = index;
        }
        previous = Some(is_space);
    }

    if start < text.len() {
        runs.push(&text[start..]);
    }

    runs
}

/// Greedy word wrap. Words wider than the row are split by character;
/// whitespace at the start of a continuation row is dropped. Always yields
/// at least one row.
fn wrap_row(segments: &[Segment], width: usize) -> Vec<Row> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = Row::new();
    let mut used = 0;

    for word in words(segments) {
        if used + word.width <= width {
            let continuation_indent = word.is_space && used == 0 && !rows.is_empty();
            if !continuation_indent {
                extend_row(&mut current, word.pieces);
                used += word.width;
            }
            continue;
        }

        if word.is_space {
            rows.push(std::mem::take(&mut current));
            used = 0;
            continue;
        }

        if used > 0 {
            rows.push(std::mem::take(&mut current));
            used = 0;
        }

        if word.width <= width {
            extend_row(&mut current, word.pieces);
            used = word.width;
            continue;
        }

        for piece in word.pieces {
            for ch in piece.text.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if used + ch_width > width && used > 0 {
                    rows.push(std::mem::take(&mut current));
                    used = 0;
                }
                push_text(&mut current, ch.encode_utf8(&mut [0; 4]), piece.style);
                used += ch_width;
            }
        }
    }

    rows.push(current);
    rows
}

fn push_text(row: &mut Row, text: &str, style: Style) {
    match row.last_mut() {
        Some(last) if last.style == style => last.text.push_str(text),
        _ => row.push(Segment::new(text, style)),
    }
}

fn extend_row(row: &mut Row, pieces: Row) {
    for piece in pieces {
        push_text(row, &piece.text, piece.style);
    }
}

fn row_to_line(indent: &str, row: Row) -> Line<'static> {
    if row.is_empty() {
        return Line::default();
    }

    let mut spans = vec![Span::raw(indent.to_owned())];
    spans.extend(
        row.into_iter()
            .map(|segment| Span::styled(segment.text, segment.style)),
    );
    Line::from(spans)
}

fn format_time(timestamp_ms: i64) -> String {
    match Local.timestamp_millis_opt(timestamp_ms) {
        chrono::LocalResult::Single(dt) => dt.format("%H:%M").to_string(),
        chrono::LocalResult::Ambiguous(dt, _) => dt.format("%H:%M").to_string(),
        chrono::LocalResult::None => "??:??".to_owned(),
    }
}
