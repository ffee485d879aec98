//! Percent-encoding for link and image destinations.
//!
//! Destinations are embedded inside `(...)`, so whitespace and a handful
//! of unsafe characters must be encoded. `%` is deliberately left alone:
//! already-encoded sequences and literal percent signs must survive a
//! round trip byte for byte, so the helper never re-encodes.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters that cannot appear raw inside a destination.
const DESTINATION: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'`');

/// Percent-encode a URL for embedding inside `(...)`.
pub fn encode(url: &str) -> String {
    utf8_percent_encode(url, DESTINATION).to_string()
}
