//! Error taxonomy shared by the pipeline stages.
//!
//! Parse-level failures are fatal for a run and nothing is written.
//! Per-record anomalies (an unresolvable group key, a fix whose prior text
//! is gone) are reported to the caller and the record passes through or is
//! skipped; they never abort the batch.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// Input file unreadable (missing, permissions, raw I/O failure).
    #[error("cannot read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is not valid JSON even after byte sanitization.
    #[error("{} is not valid JSON after byte sanitization", path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// None of the fix's match strings occur in the text. Expected when the
    /// diagram was already patched or never had the assumed prior state.
    #[error("fix '{fix_id}': no match string found, text left unchanged")]
    FixNotApplicable { fix_id: String },

    /// The fix id is not in the registry.
    #[error("unknown diagram fix '{fix_id}'")]
    UnknownFix { fix_id: String },

    /// Document could not be serialized for the output file.
    #[error("cannot serialize document for {}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Output file could not be written.
    #[error("cannot write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
