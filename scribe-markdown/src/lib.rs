//! Bidirectional conversion between editor markup and the Scribe document tree
//!
//!     This crate is the converter behind the rich-text editing surface: it parses
//!     the plain-text markup dialect into a typed document tree and renders such a
//!     tree back to markup. The two directions are designed as inverses: re-parsing
//!     rendered markup reproduces the same tree, with one documented exception
//!     (empty-href links are dropped at parse time).
//!
//!     TLDR for contributors:
//!         - The converter is total. There is no parse-error state; malformed markup
//!           degrades to paragraphs and unknown tree nodes render to nothing.
//!         - The tree (./ast/) is the contract with the editor runtime. It is plain
//!           owned data, produced once per parse, immutable during serialization.
//!         - Both directions are hand-written. The dialect is markdown-shaped but
//!           not CommonMark (no setext headings, todo lists, hashtags, ++/__ marks,
//!           leaf-with-marks inlines), so an off-the-shelf markdown library cannot
//!           express it.
//!         - Every behavior change needs a round-trip test. See tests/markdown/.
//!
//! Architecture
//!
//!     The file structure:
//!     .
//!     ├── ast                     # the document tree (nodes.rs)
//!     ├── error.rs                # ConvertError for registry/JSON paths
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── markdown
//!     │   │   ├── parser.rs       # block parser (markup → tree)
//!     │   │   ├── inline.rs       # inline scanner (marks, links, hashtags)
//!     │   │   ├── serializer.rs   # rule-chain renderer (tree → markup)
//!     │   │   ├── rules.rs        # Rule trait, built-ins, UserMentionRule
//!     │   │   ├── escape.rs       # markup-character escaping
//!     │   │   └── urls.rs         # destination percent-encoding
//!     │   └── json                # the tree as editor node objects (serde)
//!     └── lib.rs
//!
//! Testing
//!
//!     tests
//!     ├── common/mod.rs           # assert_symmetry: parse → render → re-parse
//!     └── markdown
//!         ├── <area>.rs           # paragraphs, headings, marks, lists, ...
//!         └── properties.rs       # proptest round-trip properties
//!
//!     Note that rust does not by default discover tests in subdirectories, so we
//!     need to include these in the mod.
//!
//! Core Algorithms
//!
//!     The hard parts are the ambiguous block grammar (headings vs. rules, greedy
//!     vs. non-greedy blank lines, nested lists, tables) and mark spans: a mark
//!     belongs to a run of sibling leaves, so the renderer must emit one delimiter
//!     pair per span, not per leaf. The serializer resolves spans by comparing each
//!     leaf's mark set with its neighbors'; the parser resolves the block grammar
//!     with a fixed priority order per block start.
//!
//! Extensibility
//!
//!     Serialization runs through an ordered rule chain. Rules prepended via
//!     Markdown::with_rules shadow the built-ins, which is how write-only node
//!     kinds like user mentions are added without touching the core (see
//!     rules::UserMentionRule).

pub mod ast;
pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub use ast::Document;
pub use error::ConvertError;
pub use format::Format;
pub use formats::markdown::{Markdown, Rule, UserMentionRule};
pub use registry::FormatRegistry;

/// Parse markup into a document tree with the built-in rules.
///
/// Total: never fails, whatever the input.
pub fn deserialize(source: &str) -> Document {
    Markdown::new().deserialize(source)
}

/// Render a document tree to markup with the built-in rules.
///
/// Total: unknown node combinations degrade to empty output rather than
/// erroring. The result is trimmed and blocks are newline-joined.
pub fn serialize(doc: &Document) -> String {
    Markdown::new().serialize(doc)
}
