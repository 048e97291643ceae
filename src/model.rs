//! Shared data model for the question files.
//!
//! The wire format is a top-level object with `passages`, `instructions` and
//! `questions` arrays. Only the fields the pipeline actually touches are
//! typed; everything else rides along in a flattened map so a rewrite never
//! loses data.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One exam paper worth of data, as stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub passages: Vec<Passage>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub instructions: Vec<Instruction>,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Shared reading passage a group of questions refers to.
/// Ids look like "Passage I", "Passage II".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Passage {
    pub id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Shared instruction block. Ids look like "Instruction 1", "Instruction 2".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Instruction {
    pub id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Question {
    /// Dense, 1-based after a merge; see [`crate::dedupe::merge_unique`].
    #[serde(default)]
    pub id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<Choice>,
    #[serde(
        default,
        rename = "correctAnswer",
        skip_serializing_if = "Option::is_none"
    )]
    pub correct_answer: Option<String>,
    /// May embed diagram markup; see [`crate::diagram`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, rename = "passageId", skip_serializing_if = "Option::is_none")]
    pub passage_id: Option<String>,
    #[serde(
        default,
        rename = "instructionId",
        skip_serializing_if = "Option::is_none"
    )]
    pub instruction_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One answer option. The oldest files store options as bare strings, newer
/// ones as objects with a `text` field plus whatever else the generator
/// attached, so both shapes round-trip here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Choice {
    Text(String),
    Detailed(ChoiceDetail),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChoiceDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Choice {
    pub fn text(&self) -> Option<&str> {
        match self {
            Choice::Text(s) => Some(s),
            Choice::Detailed(d) => d.text.as_deref(),
        }
    }

    pub fn set_text(&mut self, value: String) {
        match self {
            Choice::Text(s) => *s = value,
            Choice::Detailed(d) => d.text = Some(value),
        }
    }
}

/// Which shared block a question points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey<'a> {
    Passage(&'a str),
    Instruction(&'a str),
}

impl Question {
    /// Foreign key to the question's shared block, if any. A question may
    /// reference at most one block; `passageId` wins when both are present.
    pub fn group_key(&self) -> Option<GroupKey<'_>> {
        if let Some(id) = self.passage_id.as_deref() {
            Some(GroupKey::Passage(id))
        } else {
            self.instruction_id.as_deref().map(GroupKey::Instruction)
        }
    }
}
