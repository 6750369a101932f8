#![forbid(unsafe_code)]

use super::Question;

pub fn default_bank() -> Vec<Question> {
    vec![
        Question::new(
            "What does CSS stand for?",
            &[
                "Creative Style Sheets",
                "Cascading Style Sheets",
                "Computer Style Sheets",
            ],
            1,
        ),
        Question::new(
            "Which tag is used for JavaScript?",
            &["<js>", "<javascript>", "<script>"],
            2,
        ),
        Question::new(
            "Which language runs in the browser?",
            &["Python", "JavaScript", "C++"],
            1,
        ),
    ]
}
