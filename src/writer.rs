//! Stable pretty-printed output.
//!
//! Serialization happens fully in memory before the file is touched, so a
//! failed run never leaves a partial output file behind.

use std::fs;
use std::path::Path;

use crate::error::PipelineError;
use crate::model::Document;

pub fn write_document(path: &Path, doc: &Document) -> Result<(), PipelineError> {
    let pretty = serde_json::to_string_pretty(doc).map_err(|source| PipelineError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, pretty).map_err(|source| PipelineError::Write {
        path: path.to_path_buf(),
        source,
    })
}
