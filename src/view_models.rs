use crate::model::{Question, QuizResult};

/// Per-question breakdown of a completed attempt, for result screens.
#[derive(Clone, Debug)]
pub struct QuizDetailedResults {
    pub result: QuizResult,
    pub question_results: Vec<QuestionResult>,
    pub time_per_question: f64,
}

#[derive(Clone, Debug)]
pub struct QuestionResult {
    pub question: Question,
    pub selected_index: Option<usize>,
    pub correct: bool,
}
