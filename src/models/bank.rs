use std::sync::OnceLock;

use crate::models::question::{
    CheckboxDetails, Question, QuestionDetails, QuestionType, RadioDetails, TextDetails,
};

static QUESTION_BANK: OnceLock<Vec<Question>> = OnceLock::new();

/// The fixed master question list. Built once per process, immutable after.
pub fn question_bank() -> &'static [Question] {
    QUESTION_BANK.get_or_init(build_bank).as_slice()
}

fn text(id: i32, question: &str, correct_text: &str) -> Question {
    Question {
        id,
        question_type: QuestionType::Text,
        question: question.to_string(),
        details: QuestionDetails::Text(TextDetails {
            correct_text: correct_text.to_string(),
        }),
    }
}

fn radio(id: i32, question: &str, choices: &[&str], correct_index: i64) -> Question {
    Question {
        id,
        question_type: QuestionType::Radio,
        question: question.to_string(),
        details: QuestionDetails::Radio(RadioDetails {
            choices: choices.iter().map(|c| c.to_string()).collect(),
            correct_index,
        }),
    }
}

fn checkbox(id: i32, question: &str, choices: &[&str], correct_indexes: &[i64]) -> Question {
    Question {
        id,
        question_type: QuestionType::Checkbox,
        question: question.to_string(),
        details: QuestionDetails::Checkbox(CheckboxDetails {
            choices: choices.iter().map(|c| c.to_string()).collect(),
            correct_indexes: correct_indexes.to_vec(),
        }),
    }
}

fn build_bank() -> Vec<Question> {
    vec![
        radio(1, "What is 2 + 2?", &["2", "3", "4", "5"], 2),
        checkbox(2, "Select prime numbers", &["2", "3", "4", "5"], &[0, 1, 3]),
        text(3, "Name the chemical symbol for water", "H2O"),
        radio(
            4,
            "Which is a frontend framework?",
            &["Express", "React", "Flask", "Django"],
            1,
        ),
        checkbox(
            5,
            "Select JavaScript data types",
            &["String", "Number", "Boolean", "Integer"],
            &[0, 1, 2],
        ),
        text(6, "What planet is known as the Red Planet?", "Mars"),
        radio(
            7,
            "HTTP status code for success?",
            &["200", "400", "404", "500"],
            0,
        ),
        text(8, "Who wrote \"The Odyssey\"?", "Homer"),
        radio(
            9,
            "What language does the browser run?",
            &["Python", "C++", "JavaScript", "Java"],
            2,
        ),
        checkbox(
            10,
            "Which are frontend technologies?",
            &["HTML", "CSS", "Node.js", "React"],
            &[0, 1, 3],
        ),
        text(11, "What does HTML stand for?", "HyperText Markup Language"),
        text(12, "What does API stand for?", "Application Programming Interface"),
        radio(
            13,
            "Which one is NOT a programming language?",
            &["Java", "Python", "HTML", "C#"],
            2,
        ),
        radio(
            14,
            "Which is a version control system?",
            &["Git", "Node", "React", "Laravel"],
            0,
        ),
        checkbox(
            15,
            "Select fruits",
            &["Apple", "Carrot", "Banana", "Potato"],
            &[0, 2],
        ),
        text(16, "What is the largest ocean on Earth?", "Pacific Ocean"),
        radio(
            17,
            "Which company created JavaScript?",
            &["Microsoft", "Netscape", "Google", "Apple"],
            1,
        ),
        checkbox(
            18,
            "Select odd numbers",
            &["1", "2", "3", "4", "5"],
            &[0, 2, 4],
        ),
        text(19, "What gas do plants breathe in?", "Carbon Dioxide"),
        radio(
            20,
            "React is a ___?",
            &["Library", "Language", "Database", "Compiler"],
            0,
        ),
    ]
}
