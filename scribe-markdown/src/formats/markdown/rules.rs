//! The serializer's rule chain: the built-in rendering rules and the
//! opt-in user-mention extension.

use super::serializer::Renderer;
use super::urls;
use crate::ast::{Alignment, Block, Inline, List, ListItem, ListKind, Table};

/// A serialization rule. The chain is tried top to bottom for every node
/// and the first rule returning `Some` wins, so rules prepended by the
/// caller shadow the built-ins.
pub trait Rule: Send + Sync {
    fn block(&self, _node: &Block, _renderer: &Renderer<'_>) -> Option<String> {
        None
    }

    fn inline(&self, _node: &Inline, _renderer: &Renderer<'_>) -> Option<String> {
        None
    }
}

/// The built-in rules: an exhaustive match over the tree's node kinds.
pub struct CoreRules;

impl Rule for CoreRules {
    fn block(&self, node: &Block, r: &Renderer<'_>) -> Option<String> {
        let rendered = match node {
            Block::Paragraph(p) => format!("{}\n", r.inlines(&p.content, true)),
            Block::Heading(h) => {
                let level = usize::from(h.level.clamp(1, 6));
                format!("{} {}\n", "#".repeat(level), r.inlines(&h.content, true))
            }
            Block::HorizontalRule => "---\n".to_string(),
            Block::BlockQuote(quote) => {
                let mut body = String::new();
                for child in &quote.nodes {
                    body.push_str(&r.block(child));
                }
                let body = body.strip_suffix('\n').unwrap_or(&body);
                let quoted: Vec<String> =
                    body.split('\n').map(|line| format!("> {line}")).collect();
                format!("{}\n", quoted.join("\n"))
            }
            Block::Code(code) => {
                let mut out = format!("```{}\n", code.language.as_deref().unwrap_or(""));
                for line in &code.lines {
                    // a literal fence inside the content must not close ours
                    out.push_str(&line.replace("```", "\\`\\`\\`"));
                    out.push('\n');
                }
                out.push_str("```\n");
                out
            }
            Block::List(list) => render_list(list, r),
            Block::Table(table) => render_table(table, r),
            Block::Image(image) => {
                let title = image
                    .title
                    .as_deref()
                    .filter(|t| !t.is_empty())
                    .map(|t| format!(" \"{t}\""))
                    .unwrap_or_default();
                format!("![{}]({}{})\n", image.alt, urls::encode(&image.src), title)
            }
        };
        Some(rendered)
    }

    fn inline(&self, node: &Inline, r: &Renderer<'_>) -> Option<String> {
        match node {
            Inline::Link(link) => {
                let href = urls::encode(&link.href);
                let children = r.inlines(&link.nodes, true);
                let trimmed = children.trim();
                let text = if trimmed.is_empty() {
                    href.as_str()
                } else {
                    trimmed
                };
                Some(format!("[{text}]({href})"))
            }
            Inline::Hashtag(tag) => Some(tag.text.clone()),
            // text leaves belong to the renderer's span walk; mentions to
            // the opt-in rule below
            Inline::Text(_) | Inline::Mention(_) => None,
        }
    }
}

/// Renders `@{user_id}` mention tokens. Not installed by default: the
/// parser has no matching rule, so mentions are a write-only extension.
pub struct UserMentionRule;

impl Rule for UserMentionRule {
    fn inline(&self, node: &Inline, _renderer: &Renderer<'_>) -> Option<String> {
        match node {
            Inline::Mention(mention) => Some(format!("@{{{}}}", mention.user_id)),
            _ => None,
        }
    }
}

fn render_list(list: &List, r: &Renderer<'_>) -> String {
    let mut out = String::new();
    for (index, item) in list.items.iter().enumerate() {
        out.push_str(&render_item(item, list.kind, index, r));
    }
    // collapse the trailing blank lines nested content leaves behind
    format!("{}\n", out.trim_end_matches('\n'))
}

fn render_item(item: &ListItem, kind: ListKind, index: usize, r: &Renderer<'_>) -> String {
    let content = r.inlines(&item.content, true);
    let mut body = match kind {
        ListKind::Todo => format!(
            "[{}] {}\n",
            if item.checked { 'x' } else { ' ' },
            content
        ),
        _ => format!("{content}\n"),
    };
    if let Some(nested) = &item.nested {
        body.push_str(&render_list(nested, r));
    }
    match kind {
        ListKind::Ordered => {
            // pad continuation lines so they align under the numeral
            let number = (index + 1).to_string();
            let pad = " ".repeat(number.len() + 2);
            let padded = indent_lines(&body, &pad);
            let rest = padded.trim_start_matches(' ');
            format!("{number}. {rest}")
        }
        ListKind::Bulleted | ListKind::Todo => {
            let padded = indent_lines(&body, "  ");
            match padded.strip_prefix(' ') {
                Some(rest) => format!("-{rest}"),
                None => padded,
            }
        }
    }
}

fn indent_lines(text: &str, pad: &str) -> String {
    text.split('\n')
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Two passes over a tree that has no alignment-row node: the header
/// row's cell metadata synthesizes the alignment line.
fn render_table(table: &Table, r: &Renderer<'_>) -> String {
    let mut out = String::new();
    for (index, row) in table.rows.iter().enumerate() {
        for cell in &row.cells {
            out.push_str(&format!("| {} ", r.inlines(&cell.content, true)));
        }
        out.push_str("|\n");
        if index == 0 && row.cells.iter().any(|cell| cell.header) {
            for cell in &row.cells {
                out.push_str(match cell.align {
                    Alignment::Left => "|:--- ",
                    Alignment::Center => "|:---:",
                    Alignment::Right => "| ---:",
                    Alignment::None => "| --- ",
                });
            }
            out.push_str("|\n");
        }
    }
    format!("{}\n", out.trim())
}
