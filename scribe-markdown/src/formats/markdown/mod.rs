//! The markup dialect: bidirectional conversion with the document tree.
//!
//! This is the core of the crate. The dialect is markdown-shaped but not
//! CommonMark, so both directions are implemented here rather than
//! delegated to a markdown library: the grammar diverges on setext
//! headings (none), todo lists, hashtags, the `++`/`__` marks, and the
//! flat leaf-with-marks inline model the editor uses.
//!
//! # Element Mapping Table
//!
//! | Tree node        | Markup                  | Notes                                  |
//! |------------------|-------------------------|----------------------------------------|
//! | Paragraph        | text lines              | consecutive lines join; blank ends it  |
//! | Heading 1-6      | `# ` … `###### `        | never setext; `---`/`===` after text is text |
//! | HorizontalRule   | `---`                   | only when not preceded by a text line  |
//! | BlockQuote       | `> ` per line           | one paragraph child per quoted line    |
//! | Code             | ``` fences or 4-space indent | verbatim lines; language on the fence |
//! | List (bulleted)  | `- item`                | `*` and `+` accepted on parse          |
//! | List (ordered)   | `1. item`               | numerals renumber on render            |
//! | List (todo)      | `- [x] item`            | bare `[x] item` accepted on parse      |
//! | Table            | pipe rows               | alignment row synthesized from headers |
//! | Image            | `![alt](src "title")`   | whole-line only                        |
//! | Text + marks     | `**` `_` `` ` `` `++` `~~` `__` | delimiters per span, not per leaf |
//! | Link             | `[text](href)`          | empty href drops the node (lossy)      |
//! | Hashtag          | `#tag`                  | `-` ends the token                     |
//! | Mention          | `@{id}`                 | render-only, via [`UserMentionRule`]   |
//!
//! # Round-trip contract
//!
//! `deserialize(serialize(d)) == d` for every tree `d` the parser can
//! produce, except documents containing an empty-href link. Rendered text
//! may normalize (e.g. `*italic*` renders as `_italic_`, todo items gain
//! a `- ` prefix), but re-parsing always restores the same tree.

pub mod escape;
mod inline;
pub mod parser;
pub mod rules;
pub mod serializer;
pub mod urls;

use crate::ast::Document;
use crate::error::ConvertError;
use crate::format::Format;

pub use rules::{CoreRules, Rule, UserMentionRule};
pub use serializer::{Markdown, Renderer};

/// Format implementation for the markup dialect.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "The editor's markdown-shaped markup dialect"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, ConvertError> {
        Ok(Markdown::new().deserialize(source))
    }

    fn serialize(&self, doc: &Document) -> Result<String, ConvertError> {
        Ok(Markdown::new().serialize(doc))
    }
}
