use std::fs;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use qprep::{
    group_questions, load_document, merge_unique, normalize_document, write_document, Document,
};

// A small paper with out-of-order groups, MathJax markup and one raw
// control character smuggled into a question string.
fn sample_paper() -> Vec<u8> {
    let mut raw = br#"{
        "passages": [
            { "id": "Passage II", "text": "Second passage body" },
            { "id": "Passage I", "text": "First passage body" }
        ],
        "instructions": [
            { "id": "Instruction 10", "text": "Choose the nearest in meaning" },
            { "id": "Instruction 2", "text": "Choose the opposite" }
        ],
        "questions": [
            { "id": 1, "instructionId": "Instruction 10",
              "question": "Solve \\(x^2 = 4\\)",
              "options": [ { "text": "A. \\frac{1}{2}" }, "B. 2" ],
              "explanation": "Use \\theta and \\pi" },
            { "id": 2, "passageId": "Passage II", "question": "From passage two: "#
        .to_vec();
    raw.push(0x01);
    raw.extend_from_slice(
        br#"" },
            { "id": 3, "passageId": "Passage I", "question": "From passage one" },
            { "id": 4, "instructionId": "Instruction 2", "question": "Opposite of hot" }
        ]
    }"#,
    );
    raw
}

#[test]
fn load_group_normalize_write_round_trip() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("english_2010.json");
    fs::write(&input, sample_paper()).expect("write input");

    // control character inside a string does not break the parse
    let doc = load_document(&input).expect("load");
    assert_eq!(doc.questions.len(), 4);
    assert_eq!(
        doc.questions[1].question.as_deref(),
        Some("From passage two: \u{0001}")
    );

    // passages in key order first, then instructions numerically
    let grouped = group_questions(&doc);
    let ids: Vec<u32> = grouped.questions.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![3, 2, 4, 1]);
    assert_eq!(grouped.dropped_keyless, 0);
    assert!(grouped.unresolved.is_empty());

    let mut organized = Document {
        passages: doc.passages,
        instructions: doc.instructions,
        questions: grouped.questions,
        extra: doc.extra,
    };

    let changed = normalize_document(&mut organized);
    assert_eq!(changed, 3);
    let solve = organized
        .questions
        .iter()
        .find(|q| q.id == 1)
        .expect("question 1");
    assert_eq!(solve.question.as_deref(), Some("Solve x^(2) = 4"));
    assert_eq!(solve.options[0].text(), Some("A. (1/2)"));
    assert_eq!(solve.explanation.as_deref(), Some("Use θ and π"));

    let output = dir.path().join("organized.json");
    write_document(&output, &organized).expect("write output");

    let reread = load_document(&output).expect("reload");
    let reread_ids: Vec<u32> = reread.questions.iter().map(|q| q.id).collect();
    assert_eq!(reread_ids, vec![3, 2, 4, 1]);
    assert_eq!(reread.passages.len(), 2);
    assert_eq!(reread.instructions.len(), 2);
}

#[test]
fn merge_two_files_first_seen_wins() {
    let dir = tempdir().expect("tempdir");
    let new_path = dir.path().join("new.json");
    let old_path = dir.path().join("old.json");
    fs::write(
        &new_path,
        r#"{ "questions": [
            { "id": 7, "question": "A", "explanation": "revised" },
            { "id": 8, "question": "B" }
        ] }"#,
    )
    .expect("write new");
    fs::write(
        &old_path,
        r#"{ "questions": [
            { "id": 1, "question": "A", "explanation": "original" },
            { "id": 2, "question": "C" }
        ] }"#,
    )
    .expect("write old");

    let incoming = load_document(&new_path).expect("load new");
    let existing = load_document(&old_path).expect("load old");
    let outcome = merge_unique(incoming.questions, existing.questions);

    let texts: Vec<&str> = outcome
        .questions
        .iter()
        .filter_map(|q| q.question.as_deref())
        .collect();
    assert_eq!(texts, vec!["A", "B", "C"]);
    let ids: Vec<u32> = outcome.questions.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(
        outcome.questions[0].explanation.as_deref(),
        Some("revised")
    );
    assert_eq!(outcome.duplicates_dropped, 1);
}
