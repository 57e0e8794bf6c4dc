use serde::{Deserialize, Serialize};

/// Maximum number of options kept per question
pub const MAX_OPTIONS: usize = 4;

/// One multiple-choice question as returned by `/generate-quiz`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options`
    pub correct_answer: usize,
    pub explanation: Option<String>,
}

impl QuizQuestion {
    /// Whether `correct_answer` points at a real option.
    pub fn answer_in_range(&self) -> bool {
        self.correct_answer < self.options.len()
    }
}
