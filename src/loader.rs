//! Fault-tolerant document loading.
//!
//! Some of the source files carry raw control characters and the odd
//! invalid byte inside JSON strings, which a strict parser rejects. The
//! loader decodes with replacement and rewrites each bad control character
//! as its `\u00XX` escape before parsing, so the parse sees legal JSON and
//! the codepoint survives into the decoded string.

use std::fs;
use std::path::Path;

use crate::error::PipelineError;
use crate::model::Document;

/// Decode raw bytes as UTF-8 (invalid sequences become U+FFFD) and escape
/// every ASCII control character except tab, LF and CR as `\u00XX`.
pub fn sanitize_bytes(raw: &[u8]) -> String {
    let text = String::from_utf8_lossy(raw);
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\t' | '\n' | '\r' => out.push(ch),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out
}

/// Read and parse one question file. A parse failure after sanitization is
/// [`PipelineError::MalformedInput`] with the file path attached; it is
/// never silently swallowed.
pub fn load_document(path: &Path) -> Result<Document, PipelineError> {
    let raw = fs::read(path).map_err(|source| PipelineError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let clean = sanitize_bytes(&raw);
    serde_json::from_str(&clean).map_err(|source| PipelineError::MalformedInput {
        path: path.to_path_buf(),
        source,
    })
}
