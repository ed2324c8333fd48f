//! Formatted reply output for the one-shot CLI commands.

use std::fmt::Write;

use crossterm::style::Stylize;

use crate::domain::formatting::{DisplayBlock, Span};

const LIST_BULLET: &str = "  • ";

/// Lays out blocks as terminal text: a blank line between blocks, one
/// bullet line per list item, highlighted keywords in bold yellow unless
/// `plain` is set.
pub fn render_blocks(blocks: &[DisplayBlock], plain: bool) -> String {
    let rendered: Vec<String> = blocks
        .iter()
        .map(|block| match block {
            DisplayBlock::Paragraph(spans) => render_spans(spans, plain),
            DisplayBlock::List(items) => items
                .iter()
                .map(|item| format!("{LIST_BULLET}{}", render_spans(&item.spans, plain)))
                .collect::<Vec<_>>()
                .join("\n"),
        })
        .collect();

    rendered.join("\n\n")
}

fn render_spans(spans: &[Span], plain: bool) -> String {
    let mut out = String::new();
    for span in spans {
        if span.highlighted && !plain {
            let _ = write!(out, "{}", span.text.as_str().bold().yellow());
        } else {
            out.push_str(&span.text);
        }
    }
    out
}
