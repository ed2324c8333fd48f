//! Reply formatting: paragraph/list detection and keyword highlighting.
//!
//! Bot replies are plain text. Before rendering they are split into
//! display blocks:
//! - runs of two or more newlines separate blocks
//! - a block whose trimmed text starts with a digit, `-` or `•` is a list,
//!   one item per non-blank line with the leading marker removed
//! - anything else is a paragraph
//!
//! Inside every paragraph and list item, configured keywords are marked
//! as highlighted spans. Formatting is a pure function of the text and the
//! keyword set.

use regex::Regex;

/// Characters that mark the start of a list block.
const LIST_BULLET: char = '•';

/// A contiguous text fragment, either highlighted or plain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub highlighted: bool,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlighted: false,
        }
    }

    pub fn highlighted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlighted: true,
        }
    }
}

/// One entry of a list block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListItem {
    pub spans: Vec<Span>,
}

impl ListItem {
    pub fn plain_text(&self) -> String {
        concat_spans(&self.spans)
    }
}

/// A unit of formatted output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayBlock {
    Paragraph(Vec<Span>),
    List(Vec<ListItem>),
}

impl DisplayBlock {
    /// Text of the block with highlight markers dropped.
    ///
    /// List items are joined with newlines.
    pub fn plain_text(&self) -> String {
        match self {
            DisplayBlock::Paragraph(spans) => concat_spans(spans),
            DisplayBlock::List(items) => items
                .iter()
                .map(ListItem::plain_text)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Case-insensitive, word-bounded set of terms to emphasize.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    keywords: Vec<String>,
    pattern: Option<Regex>,
}

impl KeywordSet {
    /// Compiles the keyword alternation.
    ///
    /// Keywords keep their configured order, so an earlier keyword wins when
    /// two could match at the same position. Blank entries are skipped.
    pub fn new<I, S>(keywords: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(|keyword| keyword.as_ref().trim().to_owned())
            .filter(|keyword| !keyword.is_empty())
            .collect();

        if keywords.is_empty() {
            return Ok(Self::empty());
        }

        let alternation = keywords
            .iter()
            .map(|keyword| keyword.chars().map(case_variants).collect::<String>())
            .collect::<Vec<_>>()
            .join("|");

        // ASCII word boundaries: a keyword next to an accented letter still matches.
        let pattern = Regex::new(&format!(r"(?-u:\b)(?:{alternation})(?-u:\b)"))?;

        Ok(Self {
            keywords,
            pattern: Some(pattern),
        })
    }

    /// A set that highlights nothing.
    pub fn empty() -> Self {
        Self {
            keywords: Vec::new(),
            pattern: None,
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Splits `text` into plain and highlighted spans.
    ///
    /// All text is preserved verbatim and in order; empty fragments are
    /// omitted, so empty input yields no spans.
    pub fn highlight(&self, text: &str) -> Vec<Span> {
        if text.is_empty() {
            return Vec::new();
        }

        let Some(pattern) = &self.pattern else {
            return vec![Span::plain(text)];
        };

        let mut spans = Vec::new();
        let mut cursor = 0;

        for found in pattern.find_iter(text) {
            if found.start() > cursor {
                spans.push(Span::plain(&text[cursor..found.start()]));
            }
            if !found.as_str().is_empty() {
                spans.push(Span::highlighted(found.as_str()));
            }
            cursor = found.end();
        }

        if cursor < text.len() {
            spans.push(Span::plain(&text[cursor..]));
        }

        spans
    }
}

/// Pattern matching `ch` in either case.
///
/// Folding uses single-char uppercase mappings only, and never maps a
/// non-ASCII char onto an ASCII one, so `ſ` does not match `s` and the
/// Kelvin sign does not match `k`.
fn case_variants(ch: char) -> String {
    let canonical = fold(ch);
    let mut variants = vec![ch];
    if canonical != ch {
        variants.push(canonical);
    }
    let mut lower = canonical.to_lowercase();
    if let (Some(lowered), None) = (lower.next(), lower.next()) {
        if !variants.contains(&lowered) && fold(lowered) == canonical {
            variants.push(lowered);
        }
    }

    if variants.len() == 1 {
        return regex::escape(ch.encode_utf8(&mut [0; 4]));
    }

    let class: String = variants
        .iter()
        .map(|variant| regex::escape(variant.encode_utf8(&mut [0; 4])))
        .collect();
    format!("[{class}]")
}

fn fold(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(folded), None) if ch.is_ascii() || !folded.is_ascii() => folded,
        _ => ch,
    }
}

/// Formats raw reply text into display blocks.
pub fn format(text: &str, keywords: &KeywordSet) -> Vec<DisplayBlock> {
    split_paragraphs(text)
        .into_iter()
        .map(str::trim)
        .filter(|candidate| !candidate.is_empty())
        .map(|candidate| {
            if looks_like_list(candidate) {
                DisplayBlock::List(list_items(candidate, keywords))
            } else {
                DisplayBlock::Paragraph(keywords.highlight(candidate))
            }
        })
        .collect()
}

/// Splits on runs of two or more `\n`.
fn split_paragraphs(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let bytes = text.as_bytes();
    let mut index = 0;

    while index < bytes.len() {
        if bytes[index] == b'\n' {
            let run_start = index;
            while index < bytes.len() && bytes[index] == b'\n' {
                index += 1;
            }
            if index - run_start >= 2 {
                parts.push(&text[start..run_start]);
                start = index;
            }
        } else {
            index += 1;
        }
    }

    parts.push(&text[start..]);
    parts
}

fn looks_like_list(trimmed: &str) -> bool {
    trimmed
        .chars()
        .next()
        .is_some_and(|ch| ch.is_ascii_digit() || ch == '-' || ch == LIST_BULLET)
}

fn list_items(block: &str, keywords: &KeywordSet) -> Vec<ListItem> {
    block
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| ListItem {
            spans: keywords.highlight(strip_list_marker(line)),
        })
        .collect()
}

/// Removes a leading run of `-`, `•`, digits and periods plus the
/// whitespace after it. Only markers at the very start of the line count.
fn strip_list_marker(line: &str) -> &str {
    let after_marker = line.trim_start_matches(|ch: char| {
        ch.is_ascii_digit() || ch == '-' || ch == '.' || ch == LIST_BULLET
    });

    if after_marker.len() == line.len() {
        return line;
    }

    after_marker.trim_start()
}

fn concat_spans(spans: &[Span]) -> String {
    spans.iter().map(|span| span.text.as_str()).collect()
}
