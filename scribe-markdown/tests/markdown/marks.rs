use crate::common::{assert_symmetry, parse};
use scribe_markdown::ast::{Block, Inline, Mark, Text};

fn paragraph_content(source: &str) -> Vec<Inline> {
    let doc = parse(source);
    let Block::Paragraph(p) = &doc.nodes[0] else {
        panic!("expected paragraph for {source:?}");
    };
    p.content.clone()
}

#[test]
fn bold_mark() {
    let text = "**this is bold**";
    assert_symmetry(text, true);
    assert_eq!(
        paragraph_content(text),
        vec![Inline::Text(Text::marked("this is bold", vec![Mark::Bold]))]
    );
}

#[test]
fn italic_mark_with_both_delimiters() {
    let text = "*this is italic* _this is italic too_";
    assert_symmetry(text, true);
    assert_eq!(
        paragraph_content(text),
        vec![
            Inline::Text(Text::marked("this is italic", vec![Mark::Italic])),
            Inline::Text(Text::plain(" ")),
            Inline::Text(Text::marked("this is italic too", vec![Mark::Italic])),
        ]
    );
}

#[test]
fn bold_mark_inside_italic_mark() {
    let text = "nothing _italic and **bold** and_ nothing";
    let rendered = assert_symmetry(text, true);
    assert_eq!(rendered, text);
}

#[test]
fn italic_mark_inside_bold_mark() {
    let text = "nothing **bold and _italic_ and** nothing";
    let rendered = assert_symmetry(text, true);
    assert_eq!(rendered, text);
}

#[test]
fn deleted_mark() {
    let text = "~~this is strikethrough~~";
    assert_symmetry(text, true);
    assert_eq!(
        paragraph_content(text),
        vec![Inline::Text(Text::marked(
            "this is strikethrough",
            vec![Mark::Deleted]
        ))]
    );
}

#[test]
fn inserted_mark() {
    let text = "++inserted text++";
    assert_symmetry(text, true);
    assert_eq!(
        paragraph_content(text),
        vec![Inline::Text(Text::marked("inserted text", vec![Mark::Inserted]))]
    );
}

#[test]
fn underlined_mark() {
    let text = "__underlined text__";
    assert_symmetry(text, true);
    assert_eq!(
        paragraph_content(text),
        vec![Inline::Text(Text::marked(
            "underlined text",
            vec![Mark::Underlined]
        ))]
    );
}

#[test]
fn code_mark() {
    let text = "`const foo = 123;`";
    assert_symmetry(text, true);
    assert_eq!(
        paragraph_content(text),
        vec![Inline::Text(Text::marked("const foo = 123;", vec![Mark::Code]))]
    );
}

#[test]
fn code_mark_with_markup_characters() {
    let text = "`<script>alert('foo')</script>`";
    assert_symmetry(text, true);
}

#[test]
fn does_not_escape_characters_inside_code_marks() {
    let text = "`<script>alert('foo')</script>`";
    let rendered = assert_symmetry(text, true);
    assert_eq!(rendered, text);
}

#[test]
fn handles_escaped_marks() {
    for (text, literal) in [
        ("this is \\*\\*not bold\\*\\*", "this is **not bold**"),
        ("this is \\*not italic\\*", "this is *not italic*"),
        ("this is \\[not\\]\\(a link\\)", "this is [not](a link)"),
        ("this is \\!\\[not\\]\\(an image\\)", "this is ![not](an image)"),
    ] {
        assert_eq!(
            paragraph_content(text),
            vec![Inline::Text(Text::plain(literal))],
            "for {text:?}"
        );
        assert_symmetry(text, true);
    }
}

#[test]
fn unpaired_delimiters_stay_literal() {
    let text = "hello * bold";
    assert_symmetry(text, true);
    assert_eq!(
        paragraph_content(text),
        vec![Inline::Text(Text::plain("hello * bold"))]
    );
}

#[test]
fn doubly_marked_spans_round_trip() {
    let text = "***x***";
    assert_symmetry(text, true);
    assert_eq!(
        paragraph_content(text),
        vec![Inline::Text(Text::marked("x", vec![Mark::Bold, Mark::Italic]))]
    );
}
