//! HTML rendering (markdown → HTML export)
//!
//! Converts the supported markdown subset to the HTML fragment stored in a
//! survey definition. Pipeline: markdown string → block scan → per-block
//! inline formatting → concatenated HTML fragments.
//!
//! # Element mapping
//!
//! | Markdown                | HTML                        |
//! |-------------------------|-----------------------------|
//! | `# text` … `###### text`| `<h1>` … `<h6>`             |
//! | `> text`                | `<blockquote>`              |
//! | `- text` / `* ` / `+ `  | `<ul><li>`                  |
//! | `1. text`               | `<ol><li>`                  |
//! | plain lines             | `<p>`, lines joined by `<br />` |
//! | `**b**` / `__b__`       | `<strong>`                  |
//! | `*i*` / `_i_`           | `<em>`                      |
//!
//! Anything else (links, images, code, tables, nested lists) falls through to
//! literal paragraph text. Blocks are concatenated with no separator, so the
//! output is a single line regardless of input length.

pub mod document;
pub mod inline;
pub mod scanner;

use crate::block::{Block, ListKind};
use crate::direction::Direction;

pub use document::{wrap_in_document, DocumentOptions};

/// Convert markdown to an HTML fragment.
///
/// Never fails: empty input yields an empty string and unrecognized syntax
/// degrades to literal paragraph text.
pub fn to_html(markdown: &str) -> String {
    render(&scanner::scan(markdown))
}

/// Render a scanned block sequence to concatenated HTML fragments
pub fn render(blocks: &[Block]) -> String {
    let mut out = String::new();

    for block in blocks {
        match block {
            Block::Heading { level, text } => {
                out.push_str(&format!("<h{level}>{}</h{level}>", inline::apply(text)));
            }
            Block::Blockquote { text } => {
                out.push_str(&format!("<blockquote>{}</blockquote>", inline::apply(text)));
            }
            Block::List { list, items } => {
                let tag = match list {
                    ListKind::Unordered => "ul",
                    ListKind::Ordered => "ol",
                };
                out.push_str(&format!("<{tag}>"));
                for item in items {
                    out.push_str(&format!("<li>{}</li>", inline::apply(item)));
                }
                out.push_str(&format!("</{tag}>"));
            }
            Block::Paragraph { lines } => {
                let joined = lines.join("<br />");
                out.push_str(&format!("<p>{}</p>", inline::apply(&joined)));
            }
        }
    }

    out
}

/// Direction implementation for markdown → HTML
pub struct MarkdownToHtml;

impl Direction for MarkdownToHtml {
    fn name(&self) -> &str {
        "markdown-to-html"
    }

    fn description(&self) -> &str {
        "Render the markdown subset as survey HTML"
    }

    fn source(&self) -> &str {
        "markdown"
    }

    fn target(&self) -> &str {
        "html"
    }

    fn source_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn convert(&self, input: &str) -> String {
        to_html(input)
    }
}
