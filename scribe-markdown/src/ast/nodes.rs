//! Core data structures for the Scribe document tree.
//!
//! The tree is the contract with the editing surface: parsing produces it,
//! serialization consumes it, and the JSON format exchanges it verbatim.
//! Enums are internally tagged so the serialized form mirrors the editor's
//! node objects (`{"type": "paragraph", ...}`).

use serde::{Deserialize, Serialize};

/// The root of a document: an ordered sequence of top-level blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub nodes: Vec<Block>,
}

/// A structural unit occupying one or more whole lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Block {
    Paragraph(Paragraph),
    Heading(Heading),
    HorizontalRule,
    BlockQuote(BlockQuote),
    Code(CodeBlock),
    List(List),
    Table(Table),
    Image(Image),
}

/// A run of inline content terminated by a blank line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub content: Vec<Inline>,
}

/// A heading with level 1 through 6.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub level: u8,
    pub content: Vec<Inline>,
}

/// A quote block. The parser emits one paragraph child per quoted line;
/// a bare `>` line becomes an empty paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockQuote {
    pub nodes: Vec<Block>,
}

/// A code block. Lines are raw text, never inline-parsed or escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub lines: Vec<String>,
}

/// A list of one kind; nested lists hang off their parent item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub kind: ListKind,
    pub items: Vec<ListItem>,
}

/// The three list flavors of the dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Bulleted,
    Ordered,
    Todo,
}

/// A list item: inline content, optionally followed by exactly one nested
/// list. `checked` is meaningful only under [`ListKind::Todo`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    #[serde(default)]
    pub checked: bool,
    pub content: Vec<Inline>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nested: Option<List>,
}

/// A table. The first row's cells are headers and carry alignment; the
/// alignment row of the markup is synthesized from them on render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    #[serde(default)]
    pub header: bool,
    #[serde(default)]
    pub align: Alignment,
    pub content: Vec<Inline>,
}

/// Column alignment recorded on header cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
    #[default]
    None,
}

/// A standalone image block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Content within a block's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Inline {
    Text(Text),
    Link(Link),
    Hashtag(Hashtag),
    Mention(Mention),
}

/// A text leaf. Marks are stored in opening order (outermost first); a
/// mark spans adjacent leaves whenever both carry its type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<Mark>,
}

/// A link wrapping further inline content, so marks can appear inside the
/// link text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    pub nodes: Vec<Inline>,
}

/// A hashtag token, stored with its leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hashtag {
    pub text: String,
}

/// A user mention. Render-only: the parser never produces one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mention {
    pub user_id: String,
}

/// A named formatting property applied to a contiguous run of leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    Bold,
    Italic,
    Code,
    Inserted,
    Deleted,
    Underlined,
}

impl Text {
    pub fn plain(text: impl Into<String>) -> Self {
        Text {
            text: text.into(),
            marks: Vec::new(),
        }
    }

    pub fn marked(text: impl Into<String>, marks: Vec<Mark>) -> Self {
        Text {
            text: text.into(),
            marks,
        }
    }
}
