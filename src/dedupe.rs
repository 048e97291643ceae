//! First-seen-wins merge of two question collections.
//!
//! Uniqueness is exact string equality on the raw `question` field, not
//! semantic equality: two copies that differ only in whitespace or markup
//! are distinct records here. Run the normalizer first if that is not
//! wanted.

use std::collections::HashSet;

use crate::model::Question;

#[derive(Debug)]
pub struct MergeOutcome {
    pub questions: Vec<Question>,
    pub duplicates_dropped: usize,
}

/// Merge `incoming` and `existing`, keeping the first occurrence of each
/// question text. `incoming` is scanned first, so its copy wins over the
/// one in `existing`; callers that want the opposite bias swap the
/// arguments. Ids are reassigned 1-based in output order afterwards.
pub fn merge_unique(incoming: Vec<Question>, existing: Vec<Question>) -> MergeOutcome {
    let mut seen: HashSet<String> = HashSet::new();
    let mut questions: Vec<Question> = Vec::new();
    let mut duplicates_dropped = 0usize;

    for q in incoming.into_iter().chain(existing) {
        // a missing question text keys as the empty string, so at most one
        // text-less record survives
        let key = q.question.clone().unwrap_or_default();
        if seen.insert(key) {
            questions.push(q);
        } else {
            duplicates_dropped += 1;
        }
    }

    for (idx, q) in questions.iter_mut().enumerate() {
        q.id = (idx + 1) as u32;
    }

    MergeOutcome {
        questions,
        duplicates_dropped,
    }
}
