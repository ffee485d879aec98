//! The serializer (document tree → markup text).
//!
//! Rendering is driven by an ordered chain of [`Rule`] objects: for each
//! node the chain is tried top to bottom and the first rule returning
//! `Some` wins. Custom rules prepended via [`Markdown::with_rules`]
//! shadow the built-ins, which lets callers add node kinds (user
//! mentions) without touching the core. Unmatched nodes render as the
//! empty string; serialization never fails.

use super::escape::escape_markup_chars;
use super::parser;
use super::rules::{CoreRules, Rule};
use crate::ast::{Block, Document, Inline, Mark, Text};

/// The markup converter. The rule chain is read-only after construction,
/// and all per-call state lives on the stack, so a single instance can
/// convert independent documents concurrently.
pub struct Markdown {
    rules: Vec<Box<dyn Rule>>,
}

impl Markdown {
    /// A converter with the built-in rules only.
    pub fn new() -> Self {
        Self::with_rules(Vec::new())
    }

    /// A converter with `custom` rules tried ahead of the built-ins.
    pub fn with_rules(custom: Vec<Box<dyn Rule>>) -> Self {
        let mut rules = custom;
        rules.push(Box::new(CoreRules));
        Markdown { rules }
    }

    /// Parse markup into a document tree. Total over its input: malformed
    /// markup degrades to paragraphs, never an error.
    pub fn deserialize(&self, source: &str) -> Document {
        parser::parse(source)
    }

    /// Render a document tree back to markup. Blocks render with a
    /// trailing newline and are newline-joined; the result is trimmed.
    pub fn serialize(&self, doc: &Document) -> String {
        let renderer = Renderer { rules: &self.rules };
        let blocks: Vec<String> = doc.nodes.iter().map(|node| renderer.block(node)).collect();
        blocks.join("\n").trim().to_string()
    }
}

impl Default for Markdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Recursion handle handed to rules so they can render children.
pub struct Renderer<'a> {
    rules: &'a [Box<dyn Rule>],
}

impl Renderer<'_> {
    /// Render one block through the rule chain.
    pub fn block(&self, node: &Block) -> String {
        for rule in self.rules {
            if let Some(rendered) = rule.block(node, self) {
                return rendered;
            }
        }
        String::new()
    }

    /// Render a run of inline nodes. Mark delimiters are emitted only at
    /// span boundaries: a mark opens iff the previous sibling leaf lacks
    /// it and closes iff the next sibling leaf lacks it.
    pub fn inlines(&self, nodes: &[Inline], escape: bool) -> String {
        let mut out = String::new();
        for (index, node) in nodes.iter().enumerate() {
            match node {
                Inline::Text(leaf) => {
                    let prev = sibling_marks(nodes, index.checked_sub(1));
                    let next = sibling_marks(nodes, Some(index + 1));
                    out.push_str(&self.leaf(leaf, prev, next, escape));
                }
                other => {
                    for rule in self.rules {
                        if let Some(rendered) = rule.inline(other, self) {
                            out.push_str(&rendered);
                            break;
                        }
                    }
                }
            }
        }
        out
    }

    fn leaf(&self, leaf: &Text, prev: &[Mark], next: &[Mark], escape: bool) -> String {
        let in_code = leaf.marks.contains(&Mark::Code);
        let text = if escape && !in_code {
            escape_markup_chars(&leaf.text)
        } else {
            leaf.text.clone()
        };
        // Marks continuing from the previous leaf must sit outermost so
        // delimiters stay well-formed when spans start or stop at
        // different leaves.
        let mut marks: Vec<Mark> = leaf
            .marks
            .iter()
            .copied()
            .filter(|m| prev.contains(m))
            .collect();
        marks.extend(leaf.marks.iter().copied().filter(|m| !prev.contains(m)));
        let mut out = String::new();
        for mark in &marks {
            if !prev.contains(mark) {
                out.push_str(delimiter(*mark));
            }
        }
        out.push_str(&text);
        for mark in marks.iter().rev() {
            if !next.contains(mark) {
                out.push_str(delimiter(*mark));
            }
        }
        out
    }
}

fn sibling_marks(nodes: &[Inline], index: Option<usize>) -> &[Mark] {
    match index.and_then(|i| nodes.get(i)) {
        Some(Inline::Text(leaf)) => &leaf.marks,
        _ => &[],
    }
}

fn delimiter(mark: Mark) -> &'static str {
    match mark {
        Mark::Bold => "**",
        Mark::Italic => "_",
        Mark::Code => "`",
        Mark::Inserted => "++",
        Mark::Deleted => "~~",
        Mark::Underlined => "__",
    }
}
