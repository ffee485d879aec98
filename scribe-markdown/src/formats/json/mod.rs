//! JSON tree interchange.
//!
//! The editor runtime exchanges documents as JSON node objects; this
//! format maps that wire form onto the tree via serde. Unlike the markup
//! converter, parsing here can fail: malformed JSON is a real error.

use crate::ast::Document;
use crate::error::ConvertError;
use crate::format::Format;

/// Format implementation for the serialized document tree.
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "The document tree as editor node objects"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, ConvertError> {
        serde_json::from_str(source).map_err(|e| ConvertError::Parse(e.to_string()))
    }

    fn serialize(&self, doc: &Document) -> Result<String, ConvertError> {
        serde_json::to_string_pretty(doc).map_err(|e| ConvertError::Serialize(e.to_string()))
    }
}
