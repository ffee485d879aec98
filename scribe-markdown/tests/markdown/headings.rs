use crate::common::{assert_symmetry, parse};
use scribe_markdown::ast::Block;

#[test]
fn parses_heading_levels() {
    for level in 1..=6u8 {
        let text = format!("{} Heading", "#".repeat(level.into()));
        let doc = parse(&text);
        let Block::Heading(h) = &doc.nodes[0] else {
            panic!("expected heading for {text:?}");
        };
        assert_eq!(h.level, level);
        let rendered = assert_symmetry(&text, true);
        assert_eq!(rendered, text, "heading prefix must render identically");
    }
}

#[test]
fn parses_heading_with_italic_mark() {
    assert_symmetry("# Heading *italic* not italic", true);
}

#[test]
fn parses_heading_with_bold_mark() {
    assert_symmetry("# Heading **bold** not bold", true);
}

#[test]
fn headings_are_not_greedy_about_newlines() {
    let text = "\na paragraph\n\n## Heading\n\nanother paragraph\n";
    assert_symmetry(text, true);
    let doc = parse(text);
    assert_eq!(doc.nodes.len(), 3);
}

#[test]
fn heading_does_not_absorb_the_next_line() {
    let doc = parse("# Heading\ndirectly following text");
    assert_eq!(doc.nodes.len(), 2);
    assert!(matches!(doc.nodes[0], Block::Heading(_)));
    assert!(matches!(doc.nodes[1], Block::Paragraph(_)));
}

#[test]
fn parses_horizontal_rule() {
    let text = "\n---\n\na paragraph\n";
    assert_symmetry(text, true);
    let doc = parse(text);
    assert_eq!(doc.nodes[0], Block::HorizontalRule);
}

#[test]
fn dash_run_after_text_is_not_a_heading_or_rule() {
    let text = "\nnot a heading\n---\n";
    assert_symmetry(text, true);
    let doc = parse(text);
    assert_eq!(doc.nodes.len(), 1);
    assert!(matches!(doc.nodes[0], Block::Paragraph(_)));
}

#[test]
fn equals_run_after_text_is_not_a_heading() {
    let text = "\nnot a heading\n===\n";
    assert_symmetry(text, true);
    let doc = parse(text);
    assert_eq!(doc.nodes.len(), 1);
    assert!(matches!(doc.nodes[0], Block::Paragraph(_)));
}
