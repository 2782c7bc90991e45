use serde::{Deserialize, Serialize};

/// A single submitted answer. Clients may send the question id as a number or
/// a string; matching against the bank is done by string comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub id: AnswerId,
    pub value: AnswerValue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerId {
    Num(f64),
    Text(String),
}

impl AnswerId {
    pub fn matches(&self, question_id: i32) -> bool {
        match self {
            AnswerId::Num(n) => *n == f64::from(question_id),
            AnswerId::Text(s) => s == &question_id.to_string(),
        }
    }
}

/// Union of the value shapes the grade endpoint accepts. Anything else fails
/// payload validation; shape mismatches against a question grade as incorrect.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(f64),
    Text(String),
    Indexes(Vec<f64>),
}

impl AnswerValue {
    /// Numeric coercion for radio answers: numbers pass through, numeric
    /// strings parse, everything else is not a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AnswerValue::Number(n) => Some(*n),
            AnswerValue::Text(s) => s.trim().parse().ok(),
            AnswerValue::Indexes(_) => None,
        }
    }
}
