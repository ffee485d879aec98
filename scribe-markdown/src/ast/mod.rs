//! The typed document tree shared by the parser, the serializer, and the
//! JSON interchange format.

pub mod nodes;

pub use nodes::{
    Alignment, Block, BlockQuote, CodeBlock, Document, Hashtag, Heading, Image, Inline, Link,
    List, ListItem, ListKind, Mark, Mention, Paragraph, Table, TableCell, TableRow, Text,
};
