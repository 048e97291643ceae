//! Batch cleanup toolkit for exam-question JSON files.
//!
//! Each binary in this package makes a single pass: read one JSON file,
//! transform the document in memory, write a new file. The reusable stages
//! live here so the binaries stay thin:
//!
//! - [`loader`] — byte sanitization plus parsing into the shared model
//! - [`grouper`] — regroup questions behind their passage or instruction
//! - [`normalizer`] — ordered rule table turning MathJax markup into plain
//!   Unicode text
//! - [`dedupe`] — first-seen-wins merge of two question collections
//! - [`diagram`] — named exact-match corrections for embedded SVG snippets
//! - [`writer`] — pretty-printed JSON output
//!
//! The stages are independent of each other; every one takes a document (or
//! a piece of one) and returns a new value.

pub mod dedupe;
pub mod diagram;
pub mod error;
pub mod grouper;
pub mod loader;
pub mod model;
pub mod normalizer;
pub mod writer;

pub use dedupe::{merge_unique, MergeOutcome};
pub use diagram::{apply_named_fix, DiagramFix, FIXES};
pub use error::PipelineError;
pub use grouper::{group_questions, group_questions_by, roman_passage_cmp, Grouped};
pub use loader::{load_document, sanitize_bytes};
pub use model::{Choice, ChoiceDetail, Document, GroupKey, Instruction, Passage, Question};
pub use normalizer::{normalize_document, normalize_math, normalize_question};
pub use writer::write_document;
