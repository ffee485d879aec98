//! Error types for conversion operations.
//!
//! The markup converter itself is total: any string maps to some document
//! and any document maps to some string. Errors exist for the surrounding
//! machinery only, i.e. the format registry and the JSON tree format.

use std::fmt;

/// Errors that can occur while driving a conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Format not found in the registry
    FormatNotFound(String),
    /// Error while parsing a source text
    Parse(String),
    /// Error while serializing a document
    Serialize(String),
    /// The format does not support the requested direction
    NotSupported(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            ConvertError::Parse(msg) => write!(f, "Parse error: {msg}"),
            ConvertError::Serialize(msg) => write!(f, "Serialization error: {msg}"),
            ConvertError::NotSupported(msg) => write!(f, "Operation not supported: {msg}"),
        }
    }
}

impl std::error::Error for ConvertError {}
