use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: i32,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub question: String,
    #[serde(flatten)]
    pub details: QuestionDetails,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Text,
    Radio,
    Checkbox,
}

/// Per-type correctness data, flattened into the question object on the wire.
/// Exactly one variant applies, matching `question_type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuestionDetails {
    Checkbox(CheckboxDetails),
    Radio(RadioDetails),
    Text(TextDetails),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextDetails {
    #[serde(rename = "correctText")]
    pub correct_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadioDetails {
    pub choices: Vec<String>,
    #[serde(rename = "correctIndex")]
    pub correct_index: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckboxDetails {
    pub choices: Vec<String>,
    #[serde(rename = "correctIndexes")]
    pub correct_indexes: Vec<i64>,
}
