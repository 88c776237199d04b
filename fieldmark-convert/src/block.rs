//! Transient block model
//!
//! A [`Block`] is a classified top-level unit of a document: the scanner
//! builds them from markdown lines, the HTML renderer consumes them, and the
//! CLI inspect command serializes them as JSON. Blocks live only for the
//! duration of a single conversion; nothing here is persisted.

use serde::Serialize;

/// Which marker family an accumulated list belongs to.
///
/// Items of different kinds are never merged into one list: a kind change
/// forces a flush of the previous list even without a blank line between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Unordered,
    Ordered,
}

/// A classified top-level unit of output.
///
/// Paragraph lines and list items hold raw (not yet inline-formatted) text;
/// inline emphasis is resolved at render time, never across block boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Block {
    /// Heading with level 1-6
    Heading { level: u8, text: String },
    /// A single-line blockquote
    Blockquote { text: String },
    /// Consecutive list items of one marker family
    List { list: ListKind, items: Vec<String> },
    /// Consecutive plain-text lines, joined by a line break on render
    Paragraph { lines: Vec<String> },
}
