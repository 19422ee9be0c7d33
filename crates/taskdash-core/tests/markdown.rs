use pretty_assertions::assert_eq;

use taskdash_core::markdown::markdown_to_html;

#[test]
fn headings_emphasis_and_code() {
    let html = markdown_to_html("## Plan\nUse **bold**, *italic* and `code`.");
    assert_eq!(
        html,
        "<p><h2>Plan</h2>\nUse <strong>bold</strong>, <em>italic</em> and <code>code</code>.</p>"
    );
}

#[test]
fn https_links_become_anchors() {
    let html = markdown_to_html("[x](https://example.com)");
    assert_eq!(
        html,
        r#"<p><a href="https://example.com" target="_blank" rel="noopener noreferrer">x</a></p>"#
    );
}

#[test]
fn plain_http_links_become_anchors() {
    let html = markdown_to_html("see [docs](http://localhost:4242/notes)");
    assert!(html.contains(r#"<a href="http://localhost:4242/notes""#));
    assert!(html.contains(">docs</a>"));
}

#[test]
fn script_links_stay_literal() {
    let html = markdown_to_html("[x](javascript:alert(1))");
    assert_eq!(html, "<p>[x](javascript:alert(1))</p>");
    assert!(!html.contains("<a"));

    let data = markdown_to_html("[y](data:text/html,hi)");
    assert_eq!(data, "<p>[y](data:text/html,hi)</p>");
}

#[test]
fn rules_and_paragraphs() {
    let html = markdown_to_html("first\n\n---\n\nsecond");
    assert_eq!(html, "<p>first</p><p><hr></p><p>second</p>");
}

#[test]
fn rule_must_be_the_whole_line() {
    assert_eq!(markdown_to_html("---- "), "<p>---- </p>");
    assert_eq!(markdown_to_html("a ---"), "<p>a ---</p>");
}

#[test]
fn bullets_skip_checkbox_items() {
    let html = markdown_to_html("- apples\n- [ ] todo\n- [x] done\n- [y] other");
    assert_eq!(html, "<p>• apples\n- [ ] todo\n- [x] done\n• [y] other</p>");
}

#[test]
fn bullet_after_paragraph_break_is_not_at_line_start() {
    // The paragraph rule has already joined the lines, so there is no line start left.
    let html = markdown_to_html("intro\n\n- item");
    assert_eq!(html, "<p>intro</p><p>- item</p>");
}

#[test]
fn note_content_is_not_escaped() {
    let html = markdown_to_html("<b>raw</b> & co");
    assert_eq!(html, "<p><b>raw</b> & co</p>");
}
