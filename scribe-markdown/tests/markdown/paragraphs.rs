use crate::common::{assert_rerender_idempotent, assert_symmetry, parse};
use scribe_markdown::ast::{Block, Inline, Paragraph, Text};

#[test]
fn parses_paragraph() {
    let text = "This is just a sentence";
    let rendered = assert_symmetry(text, true);
    assert_eq!(rendered, "This is just a sentence");
}

#[test]
fn parses_paragraph_with_markup_characters() {
    let text = "This **is** a sen-ten-ce";
    let rendered = assert_symmetry(text, true);
    assert_eq!(rendered, text);
}

#[test]
fn adjacent_lines_are_one_paragraph() {
    let text = "\nThis is the first sentence\nThis is the second sentence\n";
    assert_symmetry(text, true);
    let doc = parse(text);
    assert_eq!(doc.nodes.len(), 1);
}

#[test]
fn parses_two_paragraphs() {
    let text = "\nThis is the first sentence\n\nThis is the second sentence\n";
    assert_symmetry(text, true);
    let doc = parse(text);
    assert_eq!(doc.nodes.len(), 2);
}

#[test]
fn maintains_multiple_empty_paragraphs() {
    let text = "\nThis is the first sentence\n\n\nAn empty paragraph above\n";
    assert_symmetry(text, true);
    let doc = parse(text);
    assert_eq!(doc.nodes.len(), 3);
    assert_eq!(doc.nodes[1], Block::Paragraph(Paragraph::default()));
}

#[test]
fn parses_empty_string() {
    assert_eq!(parse("").nodes, vec![]);
}

#[test]
fn parses_whitespace_string() {
    assert_eq!(parse("   ").nodes, vec![]);
}

#[test]
fn handles_escaped_blocks() {
    for (text, literal) in [
        ("\\# text", "# text"),
        ("\\- text", "- text"),
        ("\\* text", "* text"),
    ] {
        let doc = parse(text);
        assert_eq!(
            doc.nodes,
            vec![Block::Paragraph(Paragraph {
                content: vec![Inline::Text(Text::plain(literal))],
            })],
            "for {text:?}"
        );
        assert_symmetry(text, true);
    }
}

#[test]
fn rerender_is_idempotent_for_paragraphs() {
    assert_rerender_idempotent("one\n\ntwo\n\n\nthree");
}
