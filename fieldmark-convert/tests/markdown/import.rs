//! Import tests for the markdown direction (HTML → markdown)
//!
//! The reverse transform is substitution-based and best-effort; these tests
//! pin the documented rule ordering (block rules before inline rules,
//! normalization last) and the pass-through contract for foreign tags.

use fieldmark_convert::to_markdown;
use std::path::PathBuf;

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("fixture {name} should load: {e}"))
}

#[test]
fn kitchensink_recovers_editable_markdown() {
    let markdown = to_markdown(&fixture("kitchensink.html"));
    assert_eq!(
        markdown,
        "# Survey intro\n\
         Welcome to the **annual** survey.\n\
         It only takes *five* minutes.\n\
         \n\
         ## Before you start\n\
         > Answers are anonymous.\n\
         - honest\n\
         - complete\n\
         - quick\n\
         \n\
         1. read\n\
         2. answer\n\
         3. submit\n\
         \n\
         Thanks!"
    );
}

#[test]
fn every_heading_level_maps_to_hashes() {
    for level in 1..=6 {
        let html = format!("<h{level}>word</h{level}>");
        let expected = format!("{} word", "#".repeat(level));
        assert_eq!(to_markdown(&html), expected);
    }
}

#[test]
fn emphasis_markers_inside_headings_survive() {
    // Heading rule runs before the bold rule, so the strong pair inside the
    // heading is still rewritten afterwards
    assert_eq!(to_markdown("<h2><strong>a</strong> b</h2>"), "## **a** b");
}

#[test]
fn ordered_lists_renumber_from_one() {
    let html = "<ol><li>x</li><li>y</li><li>z</li></ol>";
    assert_eq!(to_markdown(html), "1. x\n2. y\n3. z");
}

#[test]
fn numbering_restarts_for_each_list() {
    let html = "<ol><li>a</li><li>b</li></ol><p>between</p><ol><li>c</li><li>d</li></ol>";
    assert_eq!(to_markdown(html), "1. a\n2. b\n\nbetween\n\n1. c\n2. d");
}

#[test]
fn unordered_items_use_dash_markers() {
    let html = "<ul><li>a</li><li>b</li></ul>";
    assert_eq!(to_markdown(html), "- a\n- b");
}

#[test]
fn blockquote_maps_to_angle_marker() {
    assert_eq!(to_markdown("<blockquote>calm</blockquote>"), "> calm");
}

#[test]
fn both_bold_tag_forms_are_recognized() {
    assert_eq!(to_markdown("<strong>a</strong>"), "**a**");
    assert_eq!(to_markdown("<b>a</b>"), "**a**");
}

#[test]
fn both_italic_tag_forms_are_recognized() {
    assert_eq!(to_markdown("<em>a</em>"), "*a*");
    assert_eq!(to_markdown("<i>a</i>"), "*a*");
}

#[test]
fn paragraph_tags_become_blank_line_separation() {
    assert_eq!(to_markdown("<p>a</p><p>b</p>"), "a\n\nb");
}

#[test]
fn all_line_break_spellings_become_newlines() {
    assert_eq!(to_markdown("<p>a<br>b</p>"), "a\nb");
    assert_eq!(to_markdown("<p>a<br/>b</p>"), "a\nb");
    assert_eq!(to_markdown("<p>a<br />b</p>"), "a\nb");
}

#[test]
fn newline_runs_collapse_to_exactly_two() {
    assert_eq!(to_markdown("a\n\n\n\n\nb"), "a\n\nb");
}

#[test]
fn normalization_is_idempotent_through_the_public_api() {
    let once = to_markdown("a\n\n\n\nb\n\n\nc");
    let twice = to_markdown(&once);
    assert_eq!(once, "a\n\nb\n\nc");
    assert_eq!(once, twice);
}

#[test]
fn foreign_tags_pass_through_verbatim() {
    assert_eq!(
        to_markdown("<table><tr><td>x</td></tr></table>"),
        "<table><tr><td>x</td></tr></table>"
    );
    assert_eq!(
        to_markdown("<a href=\"https://example.com\">x</a>"),
        "<a href=\"https://example.com\">x</a>"
    );
    assert_eq!(to_markdown("<script>evil()</script>"), "<script>evil()</script>");
}

#[test]
fn result_is_trimmed() {
    assert_eq!(to_markdown("  <p>a</p>  "), "a");
}
