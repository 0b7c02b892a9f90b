use super::*;
use crate::view_models::{QuestionResult, QuizDetailedResults};

impl QuizSession {
    /// Scores the attempt and emits its result. Every question counts: an
    /// unanswered one is simply incorrect. Idempotent: once completed,
    /// later calls return the recorded result unchanged.
    pub fn complete(&mut self) -> QuizResult {
        self.complete_at(Utc::now())
    }

    pub fn complete_at(&mut self, now: DateTime<Utc>) -> QuizResult {
        if let Some(result) = &self.result {
            log::warn!(
                "complete on already completed attempt of quiz `{}`",
                self.quiz.id
            );
            return result.clone();
        }

        let score = self.calculate_score();
        let time_taken_secs = (now - self.started_at).num_seconds().max(0) as u64;
        let result = QuizResult::new(
            self.quiz.id.clone(),
            self.quiz.title.clone(),
            score,
            self.quiz.questions.len() as u32,
            now,
            time_taken_secs,
        );
        self.result = Some(result.clone());
        result
    }

    fn calculate_score(&self) -> u32 {
        self.quiz
            .questions
            .iter()
            .filter(|q| self.selected.get(&q.id) == Some(&q.correct_index))
            .count() as u32
    }

    /// Per-question breakdown of a completed attempt. `None` until then.
    pub fn detailed_results(&self) -> Option<QuizDetailedResults> {
        let result = self.result.clone()?;
        let question_results = self
            .quiz
            .questions
            .iter()
            .map(|question| {
                let selected_index = self.selected.get(&question.id).copied();
                QuestionResult {
                    correct: selected_index == Some(question.correct_index),
                    question: question.clone(),
                    selected_index,
                }
            })
            .collect();
        let time_per_question = if self.quiz.questions.is_empty() {
            0.0
        } else {
            result.time_taken_secs as f64 / self.quiz.questions.len() as f64
        };
        Some(QuizDetailedResults {
            result,
            question_results,
            time_per_question,
        })
    }
}
