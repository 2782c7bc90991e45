use crate::dto::quiz_dto::{GradeReport, ResultEntry};
use crate::models::answer::{Answer, AnswerValue};
use crate::models::question::{Question, QuestionDetails};

pub struct GradingService;

impl GradingService {
    /// Grades a submission against the full bank. Every bank question gets a
    /// result entry in bank order; unanswered or mis-shaped answers grade as
    /// incorrect rather than erroring.
    pub fn grade(bank: &[Question], answers: &[Answer]) -> GradeReport {
        let mut score = 0;
        let mut results = Vec::with_capacity(bank.len());

        for question in bank {
            let ans = answers.iter().find(|a| a.id.matches(question.id));
            let correct = match &question.details {
                QuestionDetails::Text(t) => Self::grade_text(ans, &t.correct_text),
                QuestionDetails::Radio(r) => Self::grade_radio(ans, r.correct_index),
                QuestionDetails::Checkbox(c) => Self::grade_checkbox(ans, &c.correct_indexes),
            };

            if correct {
                score += 1;
            }
            results.push(ResultEntry {
                id: question.id,
                correct,
            });
        }

        GradeReport {
            score,
            total: bank.len() as i32,
            results,
        }
    }

    fn grade_text(ans: Option<&Answer>, correct_text: &str) -> bool {
        match ans.map(|a| &a.value) {
            Some(AnswerValue::Text(submitted)) => {
                submitted.trim().to_lowercase() == correct_text.trim().to_lowercase()
            }
            _ => false,
        }
    }

    fn grade_radio(ans: Option<&Answer>, correct_index: i64) -> bool {
        ans.and_then(|a| a.value.as_number())
            .map(|n| n == correct_index as f64)
            .unwrap_or(false)
    }

    fn grade_checkbox(ans: Option<&Answer>, correct_indexes: &[i64]) -> bool {
        let submitted = match ans.map(|a| &a.value) {
            Some(AnswerValue::Indexes(values)) => values,
            _ => return false,
        };
        if submitted.len() != correct_indexes.len() {
            return false;
        }

        let mut submitted = submitted.clone();
        submitted.sort_by(f64::total_cmp);
        let mut expected: Vec<f64> = correct_indexes.iter().map(|&i| i as f64).collect();
        expected.sort_by(f64::total_cmp);

        submitted.iter().zip(expected.iter()).all(|(a, b)| a == b)
    }
}
