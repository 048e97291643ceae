//! Regroup a flat question list behind its passages and instructions.
//!
//! Output order is: every passage group in sorted key order, then every
//! instruction group in sorted key order. Within a group the questions keep
//! their original relative order. Passage keys sort lexicographically by
//! default (or by a caller-supplied comparator); instruction keys sort by
//! the integer after the label word, so "Instruction 2" comes before
//! "Instruction 10".

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::model::{Document, GroupKey, Question};

/// Result of regrouping a document's questions.
#[derive(Debug, Default)]
pub struct Grouped {
    /// Questions in final order: passage groups first, then instructions.
    pub questions: Vec<Question>,
    /// (group key, question count) in output order.
    pub group_counts: Vec<(String, usize)>,
    /// Questions that carried no group key at all. These are dropped from
    /// the grouped output; callers needing lossless behavior must
    /// pre-validate that every question has a key.
    pub dropped_keyless: usize,
    /// (question id, key) pairs whose key matches no passage or instruction
    /// in the document. The questions are excluded and the run continues.
    pub unresolved: Vec<(u32, String)>,
}

/// Group with lexicographic passage ordering.
pub fn group_questions(doc: &Document) -> Grouped {
    group_questions_by(doc, str::cmp)
}

/// Group with a caller-supplied passage comparator, for label schemes where
/// lexicographic order is wrong (see [`roman_passage_cmp`]).
pub fn group_questions_by<F>(doc: &Document, mut passage_cmp: F) -> Grouped
where
    F: FnMut(&str, &str) -> Ordering,
{
    let passage_ids: HashSet<&str> = doc.passages.iter().map(|p| p.id.as_str()).collect();
    let instruction_ids: HashSet<&str> = doc.instructions.iter().map(|i| i.id.as_str()).collect();

    let mut by_passage: HashMap<String, Vec<Question>> = HashMap::new();
    let mut by_instruction: HashMap<String, Vec<Question>> = HashMap::new();
    let mut out = Grouped::default();

    for q in &doc.questions {
        match q.group_key() {
            Some(GroupKey::Passage(key)) => {
                if passage_ids.contains(key) {
                    by_passage.entry(key.to_string()).or_default().push(q.clone());
                } else {
                    out.unresolved.push((q.id, key.to_string()));
                }
            }
            Some(GroupKey::Instruction(key)) => {
                if instruction_ids.contains(key) {
                    by_instruction
                        .entry(key.to_string())
                        .or_default()
                        .push(q.clone());
                } else {
                    out.unresolved.push((q.id, key.to_string()));
                }
            }
            None => out.dropped_keyless += 1,
        }
    }

    let mut passage_keys: Vec<String> = by_passage.keys().cloned().collect();
    passage_keys.sort_by(|a, b| passage_cmp(a.as_str(), b.as_str()));
    let mut instruction_keys: Vec<String> = by_instruction.keys().cloned().collect();
    instruction_keys.sort_by_key(|k| instruction_sort_key(k));

    for key in passage_keys {
        let group = by_passage.remove(&key).unwrap_or_default();
        out.group_counts.push((key, group.len()));
        out.questions.extend(group);
    }
    for key in instruction_keys {
        let group = by_instruction.remove(&key).unwrap_or_default();
        out.group_counts.push((key, group.len()));
        out.questions.extend(group);
    }
    out
}

// Numeric suffix after the label word. Keys without one sort after every
// numbered key, lexicographically among themselves.
fn instruction_sort_key(key: &str) -> (u64, String) {
    let n = key
        .rsplit(' ')
        .next()
        .and_then(|tok| tok.parse().ok())
        .unwrap_or(u64::MAX);
    (n, key.to_string())
}

/// Passage comparator for roman-numeral labels. Plain lexicographic order
/// breaks at "Passage IX" vs "Passage V"; this one parses the trailing
/// numeral and falls back to lexicographic when either side has none.
pub fn roman_passage_cmp(a: &str, b: &str) -> Ordering {
    match (roman_suffix(a), roman_suffix(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        _ => a.cmp(b),
    }
}

fn roman_suffix(key: &str) -> Option<u32> {
    let tok = key.rsplit(' ').next()?;
    let mut total = 0u32;
    let mut prev = 0u32;
    for ch in tok.chars() {
        let v = match ch {
            'I' => 1,
            'V' => 5,
            'X' => 10,
            'L' => 50,
            'C' => 100,
            _ => return None,
        };
        if prev > 0 && v > prev {
            // subtractive pair: undo prev, add the difference
            total = total + v - 2 * prev;
        } else {
            total += v;
        }
        prev = v;
    }
    (total > 0).then_some(total)
}
