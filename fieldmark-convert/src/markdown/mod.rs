//! Markdown recovery (HTML → markdown import)
//!
//! Converts the stored survey HTML subset back into editable markdown. This
//! is deliberately not a parser: it is a fixed, ordered sequence of
//! whole-string substitutions, each rewriting its tag pair before the next
//! rule runs. Rule order is significant — block rules (headings, lists,
//! blockquotes) run before inline rules (bold, italic) and paragraph/line
//! break cleanup, so emphasis markers inside block content survive intact;
//! newline normalization always runs last.
//!
//! Only the tag vocabulary the forward direction produces is recognized:
//! `h1`-`h6`, `p`, `br`, `blockquote`, `ol`/`ul`/`li`, `strong`/`b`,
//! `em`/`i`. Anything else passes through verbatim as literal text — there is
//! no sanitization and no stripping, so untrusted markup needs an external
//! sanitization step before it reaches this function.
//!
//! The round trip is semantic, not textual: `to_markdown(to_html(x))`
//! preserves block kinds, heading levels, item counts and emphasis content,
//! but exact blank-line spacing may differ from `x`.

use crate::direction::Direction;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static HEADINGS: Lazy<Vec<Regex>> = Lazy::new(|| {
    (1..=6)
        .map(|level| Regex::new(&format!("(?s)<h{level}>(.*?)</h{level}>")).unwrap())
        .collect()
});
static ORDERED_LIST: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<ol>(.*?)</ol>").unwrap());
static UNORDERED_LIST: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<ul>(.*?)</ul>").unwrap());
static LIST_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<li>(.*?)</li>").unwrap());
static BLOCKQUOTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<blockquote>(.*?)</blockquote>").unwrap());
static STRONG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<strong>(.*?)</strong>").unwrap());
static BOLD_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<b>(.*?)</b>").unwrap());
static EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<em>(.*?)</em>").unwrap());
static ITALIC_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<i>(.*?)</i>").unwrap());
static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"<br\s*/?>").unwrap());
static BLANK_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Convert survey HTML back to markdown.
///
/// Never fails: empty input yields an empty string and unsupported tags pass
/// through as literal text.
pub fn to_markdown(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    let mut text = html.to_string();

    for (index, rule) in HEADINGS.iter().enumerate() {
        let hashes = "#".repeat(index + 1);
        text = rule
            .replace_all(&text, |caps: &Captures| format!("{hashes} {}\n", &caps[1]))
            .into_owned();
    }

    // Each list renumbers independently: the counter lives per <ol> match
    text = ORDERED_LIST
        .replace_all(&text, |caps: &Captures| {
            let mut counter = 0;
            let items = LIST_ITEM.replace_all(&caps[1], |item: &Captures| {
                counter += 1;
                format!("{counter}. {}\n", &item[1])
            });
            format!("{items}\n")
        })
        .into_owned();

    text = UNORDERED_LIST
        .replace_all(&text, |caps: &Captures| {
            let items = LIST_ITEM.replace_all(&caps[1], "- ${1}\n");
            format!("{items}\n")
        })
        .into_owned();

    text = BLOCKQUOTE.replace_all(&text, "> ${1}\n").into_owned();

    text = STRONG.replace_all(&text, "**${1}**").into_owned();
    text = BOLD_TAG.replace_all(&text, "**${1}**").into_owned();
    text = EMPHASIS.replace_all(&text, "*${1}*").into_owned();
    text = ITALIC_TAG.replace_all(&text, "*${1}*").into_owned();

    text = text.replace("<p>", "");
    text = text.replace("</p>", "\n\n");
    text = LINE_BREAK.replace_all(&text, "\n").into_owned();

    collapse_blank_runs(&text).trim().to_string()
}

/// Collapse any run of three or more newlines down to exactly two.
///
/// Idempotent: applying it twice yields the same string as applying it once.
fn collapse_blank_runs(text: &str) -> String {
    BLANK_RUN.replace_all(text, "\n\n").into_owned()
}

/// Direction implementation for HTML → markdown
pub struct HtmlToMarkdown;

impl Direction for HtmlToMarkdown {
    fn name(&self) -> &str {
        "html-to-markdown"
    }

    fn description(&self) -> &str {
        "Recover editable markdown from survey HTML"
    }

    fn source(&self) -> &str {
        "html"
    }

    fn target(&self) -> &str {
        "markdown"
    }

    fn source_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn convert(&self, input: &str) -> String {
        to_markdown(input)
    }
}
