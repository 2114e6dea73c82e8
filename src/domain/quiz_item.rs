use serde::{Deserialize, Serialize};

/// One multiple-choice question. `options` holds at most four entries and
/// `answer` is whatever followed `Answer:` in the completion, usually a letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItem {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}
