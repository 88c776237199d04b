//! Standalone HTML document wrapping
//!
//! [`to_html`](crate::to_html) produces a bare fragment, which is what the
//! survey definition stores. For previewing a converted file in a browser the
//! CLI can wrap the fragment in a complete HTML document with a small
//! embedded baseline stylesheet. The pure conversion contract is untouched:
//! wrapping is a separate step layered on top by the caller.

const BASELINE_CSS: &str = include_str!("../../css/baseline.css");

/// Options for document wrapping
#[derive(Debug, Clone, Default)]
pub struct DocumentOptions {
    /// Document title for the `<title>` element
    pub title: String,
    /// Optional custom CSS appended after the baseline stylesheet
    pub custom_css: Option<String>,
}

impl DocumentOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            custom_css: None,
        }
    }

    pub fn with_custom_css(mut self, css: String) -> Self {
        self.custom_css = Some(css);
        self
    }
}

/// Wrap an HTML fragment in a complete standalone document
pub fn wrap_in_document(body_html: &str, options: &DocumentOptions) -> String {
    let custom_css = options.custom_css.as_deref().unwrap_or("");
    let escaped_title = html_escape(&options.title);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="fieldmark-convert">
  <title>{escaped_title}</title>
  <style>
{BASELINE_CSS}
{custom_css}
  </style>
</head>
<body>
<div class="fieldmark-document">
{body_html}
</div>
</body>
</html>"#
    )
}

/// Escape HTML special characters in text
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
