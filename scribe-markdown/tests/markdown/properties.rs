//! Property tests for the round-trip contracts.
//!
//! Markup fragments compose into documents, and generated trees must
//! survive `deserialize(serialize(d)) == d`. Any divergence here is a
//! defect, not accepted behavior.

use crate::common::CONVERTER;
use proptest::prelude::*;
use scribe_markdown::ast::{
    Block, Document, Heading, Inline, List, ListItem, ListKind, Mark, Paragraph, Text,
};

fn sentence() -> impl Strategy<Value = String> {
    proptest::collection::vec("[a-z]{1,8}", 1..4).prop_map(|words| words.join(" "))
}

fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        sentence(),
        (1..=6usize, sentence()).prop_map(|(level, s)| format!("{} {}", "#".repeat(level), s)),
        Just("---".to_string()),
        proptest::collection::vec(sentence(), 1..3).prop_map(|lines| {
            lines
                .iter()
                .map(|l| format!("> {l}"))
                .collect::<Vec<_>>()
                .join("\n")
        }),
        proptest::collection::vec(sentence(), 1..4).prop_map(|lines| {
            lines
                .iter()
                .map(|l| format!("- {l}"))
                .collect::<Vec<_>>()
                .join("\n")
        }),
        proptest::collection::vec(sentence(), 1..4).prop_map(|lines| {
            lines
                .iter()
                .map(|l| format!("1. {l}"))
                .collect::<Vec<_>>()
                .join("\n")
        }),
        proptest::collection::vec((any::<bool>(), sentence()), 1..3).prop_map(|items| {
            items
                .iter()
                .map(|(done, l)| format!("[{}] {}", if *done { 'x' } else { ' ' }, l))
                .collect::<Vec<_>>()
                .join("\n")
        }),
        proptest::collection::vec(sentence(), 1..3)
            .prop_map(|lines| format!("```\n{}\n```", lines.join("\n"))),
        (sentence(), sentence(), sentence(), sentence()).prop_map(|(a, b, c, d)| {
            format!("| {a} | {b} |\n|:----|----:|\n| {c} | {d} |")
        }),
    ]
}

fn document_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(fragment(), 1..5).prop_map(|fragments| fragments.join("\n\n"))
}

fn mark() -> impl Strategy<Value = Mark> {
    prop_oneof![
        Just(Mark::Bold),
        Just(Mark::Italic),
        Just(Mark::Code),
        Just(Mark::Inserted),
        Just(Mark::Deleted),
        Just(Mark::Underlined),
    ]
}

/// Marked words separated by plain text, so adjacent leaves always carry
/// distinct mark sets.
fn marked_run() -> impl Strategy<Value = Vec<Inline>> {
    proptest::collection::vec(("[a-z]{1,6}", mark()), 1..4).prop_map(|pieces| {
        let mut nodes = Vec::new();
        for (index, (word, mark)) in pieces.into_iter().enumerate() {
            if index > 0 {
                nodes.push(Inline::Text(Text::plain(" then ")));
            }
            nodes.push(Inline::Text(Text::marked(word, vec![mark])));
        }
        nodes
    })
}

fn tree_block() -> impl Strategy<Value = Block> {
    prop_oneof![
        marked_run().prop_map(|content| Block::Paragraph(Paragraph { content })),
        (1..=6u8, "[a-z]{1,8}").prop_map(|(level, word)| {
            Block::Heading(Heading {
                level,
                content: vec![Inline::Text(Text::plain(word))],
            })
        }),
        proptest::collection::vec("[a-z]{1,8}", 1..4).prop_map(|words| {
            Block::List(List {
                kind: ListKind::Bulleted,
                items: words
                    .into_iter()
                    .map(|word| ListItem {
                        checked: false,
                        content: vec![Inline::Text(Text::plain(word))],
                        nested: None,
                    })
                    .collect(),
            })
        }),
        Just(Block::HorizontalRule),
    ]
}

fn tree_document() -> impl Strategy<Value = Document> {
    proptest::collection::vec(tree_block(), 1..4).prop_map(|nodes| Document { nodes })
}

proptest! {
    #[test]
    fn reparse_of_render_is_stable(source in document_text()) {
        let parsed = CONVERTER.deserialize(&source);
        let rendered = CONVERTER.serialize(&parsed);
        let reparsed = CONVERTER.deserialize(&rendered);
        prop_assert_eq!(&reparsed, &parsed, "rendered: {:?}", rendered);
    }

    #[test]
    fn rerender_is_idempotent(source in document_text()) {
        let once = CONVERTER.serialize(&CONVERTER.deserialize(&source));
        let twice = CONVERTER.serialize(&CONVERTER.deserialize(&once));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn generated_trees_round_trip(doc in tree_document()) {
        let rendered = CONVERTER.serialize(&doc);
        let reparsed = CONVERTER.deserialize(&rendered);
        prop_assert_eq!(&reparsed, &doc, "rendered: {:?}", rendered);
    }

    #[test]
    fn the_converter_is_total(source in "[ -~\\n]{0,60}") {
        // no panics, whatever the input; equality is not asserted here
        let parsed = CONVERTER.deserialize(&source);
        let rendered = CONVERTER.serialize(&parsed);
        let _ = CONVERTER.deserialize(&rendered);
    }
}
