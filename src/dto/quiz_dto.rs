use serde::{Deserialize, Serialize};

use crate::models::answer::Answer;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeRequest {
    pub answers: Vec<Answer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultEntry {
    pub id: i32,
    pub correct: bool,
}

/// One entry per bank question in bank order, regardless of what was
/// submitted or shown to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeReport {
    pub score: i32,
    pub total: i32,
    pub results: Vec<ResultEntry>,
}
