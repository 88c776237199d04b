//! Inline emphasis substitution
//!
//! Applied to a block's full text at emission time, never across block
//! boundaries. Bold runs first so that a double delimiter is not misread as
//! two single-delimiter spans. Matching is non-greedy with no handling of
//! nesting or escaped delimiters: an unterminated delimiter simply does not
//! match and stays in the output as a literal character.

use once_cell::sync::Lazy;
use regex::Regex;

static BOLD_ASTERISK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static BOLD_UNDERSCORE: Lazy<Regex> = Lazy::new(|| Regex::new(r"__(.+?)__").unwrap());
static ITALIC_ASTERISK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").unwrap());
static ITALIC_UNDERSCORE: Lazy<Regex> = Lazy::new(|| Regex::new(r"_(.+?)_").unwrap());

/// Replace bold and italic delimiters with emphasis tags
pub fn apply(text: &str) -> String {
    let text = BOLD_ASTERISK.replace_all(text, "<strong>${1}</strong>");
    let text = BOLD_UNDERSCORE.replace_all(&text, "<strong>${1}</strong>");
    let text = ITALIC_ASTERISK.replace_all(&text, "<em>${1}</em>");
    let text = ITALIC_UNDERSCORE.replace_all(&text, "<em>${1}</em>");
    text.into_owned()
}
