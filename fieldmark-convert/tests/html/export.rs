//! Export tests for the HTML direction (markdown → HTML)
//!
//! Exercises the full pipeline on realistic survey text and verifies the
//! concatenated fragment output, including the properties the stored format
//! relies on: stable block order, no whitespace between fragments, inline
//! emphasis resolved per block.

use fieldmark_convert::to_html;
use insta::assert_snapshot;
use std::path::PathBuf;

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("fixture {name} should load: {e}"))
}

#[test]
fn kitchensink_renders_every_supported_block() {
    let html = to_html(&fixture("kitchensink.md"));
    assert_snapshot!(html, @"<h1>Survey intro</h1><p>Welcome to the <strong>annual</strong> survey.<br />It only takes <em>five</em> minutes.</p><h2>Before you start</h2><blockquote>Answers are anonymous.</blockquote><ul><li>honest</li><li>complete</li><li>quick</li></ul><ol><li>read</li><li>answer</li><li>submit</li></ol><p>Thanks!</p>");
}

#[test]
fn output_contains_no_separators_between_blocks() {
    let html = to_html("# a\n\nb\n\n- c");
    assert_eq!(html, "<h1>a</h1><p>b</p><ul><li>c</li></ul>");
    assert!(!html.contains('\n'));
}

#[test]
fn block_order_follows_input_order() {
    let html = to_html("1. one\n\n> quote\n\n# last");
    let ol = html.find("<ol>").expect("ordered list present");
    let quote = html.find("<blockquote>").expect("blockquote present");
    let heading = html.find("<h1>").expect("heading present");
    assert!(ol < quote && quote < heading);
}

#[test]
fn mixed_marker_families_stay_separate_lists() {
    // An unordered run, an ordered run, then unordered again: three lists
    let html = to_html("- a\n1. b\n- c");
    assert_eq!(
        html,
        "<ul><li>a</li></ul><ol><li>b</li></ol><ul><li>c</li></ul>"
    );
}

#[test]
fn all_unordered_markers_share_one_list() {
    let html = to_html("- a\n* b\n+ c");
    assert_eq!(html, "<ul><li>a</li><li>b</li><li>c</li></ul>");
}

#[test]
fn unsupported_constructs_render_as_literal_paragraphs() {
    assert_eq!(to_html("```rust"), "<p>```rust</p>");
    assert_eq!(to_html("| a | b |"), "<p>| a | b |</p>");
    assert_eq!(
        to_html("[link](https://example.com)"),
        "<p>[link](https://example.com)</p>"
    );
}

#[test]
fn crlf_input_is_handled() {
    assert_eq!(to_html("# a\r\n\r\nb\r\n"), "<h1>a</h1><p>b</p>");
}
