//! Line-oriented block scanner
//!
//! A single pass over the input lines with an explicit state value plus
//! accumulator buffers, switched on each line's classification. The grammar
//! has four states (idle, paragraph, unordered list, ordered list), so a
//! call-stack parser would be overkill; flushing the right buffer at each
//! pattern change is the whole algorithm.
//!
//! Classification precedence per line (first match wins): blank, heading,
//! blockquote, unordered item, ordered item, plain text. Headings and
//! blockquotes are emitted immediately; list items and plain lines
//! accumulate until the pattern changes.
//!
//! Marker boundary: every marker (`#`, `>`, `-`/`*`/`+`, `digits.`) must be
//! followed by exactly one space and then text that does not itself start
//! with a space. Anything looser falls through to plain-paragraph handling.

use crate::block::{Block, ListKind};

/// Classify the input into an ordered block sequence.
///
/// Every non-blank line ends up in exactly one block; blank lines only
/// separate blocks and produce no output of their own.
pub fn scan(input: &str) -> Vec<Block> {
    let mut scanner = Scanner::default();

    for line in input.lines() {
        scanner.take_line(line.trim());
    }

    scanner.finish()
}

/// Scan state: the in-progress paragraph and list buffers plus the emitted
/// block sequence. Local to one call, discarded afterwards.
#[derive(Default)]
struct Scanner {
    blocks: Vec<Block>,
    paragraph: Vec<String>,
    items: Vec<String>,
    list_kind: Option<ListKind>,
}

impl Scanner {
    fn take_line(&mut self, line: &str) {
        if line.is_empty() {
            self.flush_list();
            self.flush_paragraph();
        } else if let Some((level, text)) = heading(line) {
            self.flush_list();
            self.flush_paragraph();
            self.blocks.push(Block::Heading {
                level,
                text: text.to_string(),
            });
        } else if let Some(text) = blockquote(line) {
            self.flush_list();
            self.flush_paragraph();
            self.blocks.push(Block::Blockquote {
                text: text.to_string(),
            });
        } else if let Some(text) = unordered_item(line) {
            self.flush_paragraph();
            self.push_item(ListKind::Unordered, text);
        } else if let Some(text) = ordered_item(line) {
            self.flush_paragraph();
            self.push_item(ListKind::Ordered, text);
        } else {
            // Plain text: interrupts a list, extends the paragraph
            self.flush_list();
            self.paragraph.push(line.to_string());
        }
    }

    fn finish(mut self) -> Vec<Block> {
        // Trailing content, list before paragraph like the per-line order
        self.flush_list();
        self.flush_paragraph();
        self.blocks
    }

    fn push_item(&mut self, kind: ListKind, text: &str) {
        if self.list_kind != Some(kind) {
            self.flush_list();
            self.list_kind = Some(kind);
        }
        self.items.push(text.to_string());
    }

    fn flush_list(&mut self) {
        if let Some(kind) = self.list_kind.take() {
            self.blocks.push(Block::List {
                list: kind,
                items: std::mem::take(&mut self.items),
            });
        }
    }

    fn flush_paragraph(&mut self) {
        if !self.paragraph.is_empty() {
            self.blocks.push(Block::Paragraph {
                lines: std::mem::take(&mut self.paragraph),
            });
        }
    }
}

/// `#{1,6}` + single space + text
fn heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if !(1..=6).contains(&hashes) {
        return None;
    }
    marker_text(&line[hashes..]).map(|text| (hashes as u8, text))
}

/// `>` + single space + text
fn blockquote(line: &str) -> Option<&str> {
    marker_text(line.strip_prefix('>')?)
}

/// `-`, `*` or `+` + single space + text
fn unordered_item(line: &str) -> Option<&str> {
    let rest = line
        .strip_prefix('-')
        .or_else(|| line.strip_prefix('*'))
        .or_else(|| line.strip_prefix('+'))?;
    marker_text(rest)
}

/// One or more digits + `.` + single space + text
fn ordered_item(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    marker_text(line[digits..].strip_prefix('.')?)
}

/// Exactly one space between marker and text; the text must not start with
/// another space (looser spacing is not part of the grammar)
fn marker_text(rest: &str) -> Option<&str> {
    let text = rest.strip_prefix(' ')?;
    if text.is_empty() || text.starts_with(' ') {
        return None;
    }
    Some(text)
}
