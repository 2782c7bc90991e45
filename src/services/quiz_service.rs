use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Error, Result};
use crate::models::question::Question;

const MIN_QUIZ_LEN: usize = 8;
const MAX_QUIZ_LEN: usize = 12;

pub struct QuizService;

impl QuizService {
    /// Random permutation of the bank followed by a random-length prefix of
    /// 8..=12 questions. No state carries over between calls; grading always
    /// runs against the full bank no matter what was selected here.
    pub fn random_selection(bank: &[Question]) -> Result<Vec<Question>> {
        if bank.is_empty() {
            return Err(Error::Internal("Question bank is empty".to_string()));
        }

        let mut rng = rand::thread_rng();
        let mut shuffled: Vec<Question> = bank.to_vec();
        shuffled.shuffle(&mut rng);

        let count = rng.gen_range(MIN_QUIZ_LEN..=MAX_QUIZ_LEN).min(shuffled.len());
        shuffled.truncate(count);
        Ok(shuffled)
    }
}
