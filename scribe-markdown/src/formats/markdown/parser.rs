//! The block parser (markup → document tree).
//!
//! Line oriented: blocks separate on one or more blank lines, except
//! fenced code and tables, which run to their own terminator. For each
//! block start the rules are tried in priority order: heading, horizontal
//! rule, quote, list, table, fenced code, indented code, standalone
//! image, paragraph fallback. There is no error state; any input resolves
//! to some tree.

use super::inline::parse_inline;
use crate::ast::{
    Alignment, Block, BlockQuote, CodeBlock, Document, Heading, Image, List, ListItem, ListKind,
    Paragraph, Table, TableCell, TableRow,
};

/// Parse markup into a document.
pub fn parse(source: &str) -> Document {
    let normalized = source.replace("\r\n", "\n");
    let lines: Vec<&str> = normalized.split('\n').collect();
    let mut nodes = Vec::new();
    let mut pos = 0;
    // leading blank lines are insignificant
    while pos < lines.len() && is_blank(lines[pos]) {
        pos += 1;
    }
    while pos < lines.len() {
        if is_blank(lines[pos]) {
            let mut run = 0;
            while pos < lines.len() && is_blank(lines[pos]) {
                run += 1;
                pos += 1;
            }
            // interior runs of blank lines survive as empty paragraphs;
            // trailing ones are dropped
            if pos < lines.len() {
                for _ in 0..run / 2 {
                    nodes.push(Block::Paragraph(Paragraph::default()));
                }
            }
            continue;
        }
        let (block, next) = next_block(&lines, pos);
        nodes.push(block);
        pos = next;
    }
    Document { nodes }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn next_block(lines: &[&str], pos: usize) -> (Block, usize) {
    if let Some(hit) = heading(lines, pos) {
        return hit;
    }
    if let Some(hit) = horizontal_rule(lines, pos) {
        return hit;
    }
    if let Some(hit) = block_quote(lines, pos) {
        return hit;
    }
    if let Some(hit) = list(lines, pos) {
        return hit;
    }
    if let Some(hit) = table(lines, pos) {
        return hit;
    }
    if let Some(hit) = fenced_code(lines, pos) {
        return hit;
    }
    if let Some(hit) = indented_code(lines, pos) {
        return hit;
    }
    if let Some(hit) = image(lines, pos) {
        return hit;
    }
    paragraph(lines, pos)
}

fn heading_shape(line: &str) -> Option<(u8, &str)> {
    let hashes = line.chars().take_while(|&c| c == '#').count();
    if !(1..=6).contains(&hashes) {
        return None;
    }
    let rest = line[hashes..].strip_prefix(' ')?;
    Some((hashes as u8, rest))
}

fn heading(lines: &[&str], pos: usize) -> Option<(Block, usize)> {
    let (level, rest) = heading_shape(lines[pos])?;
    Some((
        Block::Heading(Heading {
            level,
            content: parse_inline(rest),
        }),
        pos + 1,
    ))
}

/// A line of only `-`, `*` or `_` repeated three or more times.
fn is_rule_line(line: &str) -> bool {
    let t = line.trim();
    if t.chars().count() < 3 {
        return false;
    }
    let first = match t.chars().next() {
        Some(c @ ('-' | '*' | '_')) => c,
        _ => return false,
    };
    t.chars().all(|c| c == first)
}

fn horizontal_rule(lines: &[&str], pos: usize) -> Option<(Block, usize)> {
    if is_rule_line(lines[pos]) {
        Some((Block::HorizontalRule, pos + 1))
    } else {
        None
    }
}

/// Consecutive `>` lines form one quote; each de-prefixed line becomes a
/// paragraph child. A bare `>` is an empty line inside the quote.
fn block_quote(lines: &[&str], pos: usize) -> Option<(Block, usize)> {
    if !lines[pos].starts_with('>') {
        return None;
    }
    let mut children = Vec::new();
    let mut i = pos;
    while i < lines.len() && lines[i].starts_with('>') {
        let rest = &lines[i][1..];
        let content = rest.strip_prefix(' ').unwrap_or(rest);
        children.push(Block::Paragraph(Paragraph {
            content: parse_inline(content),
        }));
        i += 1;
    }
    Some((Block::BlockQuote(BlockQuote { nodes: children }), i))
}

struct ItemLine {
    indent: usize,
    kind: ListKind,
    checked: bool,
    text: String,
}

fn leading_indent(line: &str) -> (usize, &str) {
    let mut cols = 0;
    for (idx, c) in line.char_indices() {
        match c {
            ' ' => cols += 1,
            '\t' => cols += 4,
            _ => return (cols, &line[idx..]),
        }
    }
    (cols, "")
}

fn checkbox(text: &str) -> Option<(bool, &str)> {
    for (marker, checked) in [("[ ]", false), ("[x]", true), ("[X]", true)] {
        if let Some(rest) = text.strip_prefix(marker) {
            if rest.is_empty() {
                return Some((checked, ""));
            }
            if let Some(rest) = rest.strip_prefix(' ') {
                return Some((checked, rest));
            }
        }
    }
    None
}

fn match_item(line: &str) -> Option<ItemLine> {
    let (indent, rest) = leading_indent(line);
    if let Some((checked, text)) = checkbox(rest) {
        return Some(ItemLine {
            indent,
            kind: ListKind::Todo,
            checked,
            text: text.to_string(),
        });
    }
    for marker in ["- ", "* ", "+ "] {
        if let Some(stripped) = rest.strip_prefix(marker) {
            let content = stripped.trim_start();
            // the serializer writes todo items in the `- [x] done` form
            if let Some((checked, text)) = checkbox(content) {
                return Some(ItemLine {
                    indent,
                    kind: ListKind::Todo,
                    checked,
                    text: text.to_string(),
                });
            }
            return Some(ItemLine {
                indent,
                kind: ListKind::Bulleted,
                checked: false,
                text: content.to_string(),
            });
        }
    }
    let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        if let Some(tail) = rest[digits..].strip_prefix('.') {
            if let Some(content) = tail.strip_prefix(' ') {
                // the numeral's value never matters; items renumber on render
                return Some(ItemLine {
                    indent,
                    kind: ListKind::Ordered,
                    checked: false,
                    text: content.trim_start().to_string(),
                });
            }
        }
    }
    None
}

fn item_from(entry: ItemLine) -> ListItem {
    ListItem {
        checked: entry.checked,
        content: parse_inline(&entry.text),
        nested: None,
    }
}

fn pop_attach(stack: &mut Vec<(usize, List)>) {
    let (_, child) = stack.pop().expect("caller checked depth");
    let parent = &mut stack.last_mut().expect("caller checked depth").1;
    let item = parent.items.last_mut().expect("lists always hold an item");
    match &mut item.nested {
        Some(existing) => existing.items.extend(child.items),
        None => item.nested = Some(child),
    }
}

/// Consume a run of list-item lines, nesting by indentation: an item
/// indented deeper than its predecessor opens a nested list inside it.
/// A change of kind at the same depth closes the run.
fn list(lines: &[&str], pos: usize) -> Option<(Block, usize)> {
    let first = match_item(lines[pos])?;
    let mut stack: Vec<(usize, List)> = vec![(
        first.indent,
        List {
            kind: first.kind,
            items: vec![item_from(first)],
        },
    )];
    let mut i = pos + 1;
    while i < lines.len() {
        let Some(entry) = match_item(lines[i]) else {
            break;
        };
        let top_indent = stack.last().expect("stack never empties").0;
        if entry.indent > top_indent {
            stack.push((
                entry.indent,
                List {
                    kind: entry.kind,
                    items: vec![item_from(entry)],
                },
            ));
        } else {
            while stack.len() > 1 && entry.indent < stack.last().expect("len checked").0 {
                pop_attach(&mut stack);
            }
            let top = &mut stack.last_mut().expect("stack never empties").1;
            if entry.kind != top.kind {
                break;
            }
            top.items.push(item_from(entry));
        }
        i += 1;
    }
    while stack.len() > 1 {
        pop_attach(&mut stack);
    }
    let (_, root) = stack.pop().expect("stack never empties");
    Some((Block::List(root), i))
}

fn split_row(line: &str) -> Option<Vec<&str>> {
    let t = line.trim();
    let inner = t.strip_prefix('|')?.strip_suffix('|')?;
    Some(inner.split('|').collect())
}

fn alignment_row(line: &str) -> Option<Vec<Alignment>> {
    let cells = split_row(line)?;
    let mut aligns = Vec::with_capacity(cells.len());
    for cell in cells {
        let t = cell.trim();
        let left = t.starts_with(':');
        let right = t.len() > 1 && t.ends_with(':');
        let dashes = t.trim_matches(':');
        if dashes.len() < 3 || dashes.chars().any(|c| c != '-') {
            return None;
        }
        aligns.push(match (left, right) {
            (true, true) => Alignment::Center,
            (true, false) => Alignment::Left,
            (false, true) => Alignment::Right,
            (false, false) => Alignment::None,
        });
    }
    Some(aligns)
}

/// A pipe row followed by an alignment row opens a table; pipe rows then
/// accumulate until a blank or non-matching line.
fn table(lines: &[&str], pos: usize) -> Option<(Block, usize)> {
    let header = split_row(lines[pos])?;
    let aligns = alignment_row(lines.get(pos + 1)?)?;
    let mut rows = vec![TableRow {
        cells: header
            .iter()
            .enumerate()
            .map(|(idx, cell)| TableCell {
                header: true,
                align: aligns.get(idx).copied().unwrap_or(Alignment::None),
                content: parse_inline(cell.trim()),
            })
            .collect(),
    }];
    let mut i = pos + 2;
    while i < lines.len() {
        let Some(cells) = split_row(lines[i]) else {
            break;
        };
        rows.push(TableRow {
            cells: cells
                .iter()
                .map(|cell| TableCell {
                    header: false,
                    align: Alignment::None,
                    content: parse_inline(cell.trim()),
                })
                .collect(),
        });
        i += 1;
    }
    Some((Block::Table(Table { rows }), i))
}

fn fence_marker(line: &str) -> Option<(&'static str, Option<String>)> {
    let t = line.trim_end();
    for marker in ["```", "~~~"] {
        if let Some(rest) = t.strip_prefix(marker) {
            let token = rest.trim();
            if token.is_empty() {
                return Some((marker, None));
            }
            if !token.contains(char::is_whitespace) {
                return Some((marker, Some(token.to_string())));
            }
        }
    }
    None
}

/// Content lines are verbatim; an unterminated fence runs to the end of
/// the input. Escaped fences inside unescape back to the literal.
fn fenced_code(lines: &[&str], pos: usize) -> Option<(Block, usize)> {
    let (marker, language) = fence_marker(lines[pos])?;
    let mut body = Vec::new();
    let mut i = pos + 1;
    while i < lines.len() && lines[i].trim_end() != marker {
        body.push(lines[i].replace("\\`\\`\\`", "```"));
        i += 1;
    }
    let next = if i < lines.len() { i + 1 } else { i };
    Some((
        Block::Code(CodeBlock {
            language,
            lines: body,
        }),
        next,
    ))
}

fn dedent(line: &str) -> Option<&str> {
    line.strip_prefix("    ").or_else(|| line.strip_prefix('\t'))
}

fn indented_code(lines: &[&str], pos: usize) -> Option<(Block, usize)> {
    dedent(lines[pos])?;
    let mut body = Vec::new();
    let mut i = pos;
    while i < lines.len() {
        let Some(stripped) = dedent(lines[i]) else {
            break;
        };
        body.push(stripped.to_string());
        i += 1;
    }
    Some((
        Block::Code(CodeBlock {
            language: None,
            lines: body,
        }),
        i,
    ))
}

fn split_title(inner: &str) -> (&str, Option<String>) {
    if let Some(stripped) = inner.strip_suffix('"') {
        if let Some(idx) = stripped.find(" \"") {
            let title = &stripped[idx + 2..];
            if !title.is_empty() {
                return (&inner[..idx], Some(title.to_string()));
            }
            return (&inner[..idx], None);
        }
    }
    (inner, None)
}

fn parse_image_line(text: &str) -> Option<Image> {
    let rest = text.strip_prefix("![")?;
    let close = rest.find(']')?;
    let alt = &rest[..close];
    let tail = rest[close + 1..].strip_prefix('(')?;
    let inner = tail.strip_suffix(')')?;
    let (src, title) = split_title(inner);
    if src.is_empty() || src.contains(char::is_whitespace) {
        return None;
    }
    Some(Image {
        src: src.to_string(),
        alt: alt.to_string(),
        title,
    })
}

fn image(lines: &[&str], pos: usize) -> Option<(Block, usize)> {
    let img = parse_image_line(lines[pos].trim())?;
    Some((Block::Image(img), pos + 1))
}

/// Fallback: consecutive non-blank lines join into one paragraph,
/// newline-joined, until a blank line or a higher-priority block starts.
fn paragraph(lines: &[&str], pos: usize) -> (Block, usize) {
    let mut collected = vec![lines[pos]];
    let mut i = pos + 1;
    while i < lines.len() && !is_blank(lines[i]) && !interrupts_paragraph(lines, i) {
        collected.push(lines[i]);
        i += 1;
    }
    (
        Block::Paragraph(Paragraph {
            content: parse_inline(&collected.join("\n")),
        }),
        i,
    )
}

fn interrupts_paragraph(lines: &[&str], i: usize) -> bool {
    let line = lines[i];
    // a rule-shaped line directly after text stays text: the dialect has
    // no setext headings
    if is_rule_line(line) {
        return false;
    }
    heading_shape(line).is_some()
        || line.starts_with('>')
        || match_item(line).is_some()
        || fence_marker(line).is_some()
        || parse_image_line(line.trim()).is_some()
        || (split_row(line).is_some()
            && lines
                .get(i + 1)
                .is_some_and(|next| alignment_row(next).is_some()))
}
