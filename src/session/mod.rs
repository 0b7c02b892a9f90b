use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::model::{Question, Quiz, QuizResult};

pub mod completion;
pub mod navigation;
pub mod timer;

/// One quiz attempt, from start to scored completion.
///
/// Constructing a session starts the attempt; dropping it abandons the
/// attempt. A restart is a fresh session over the same quiz, so there is no
/// "no active attempt" state to guard against.
pub struct QuizSession {
    quiz: Quiz,
    current_index: usize,
    selected: HashMap<String, usize>,
    started_at: DateTime<Utc>,
    remaining_secs: u32,
    show_explanation: bool,
    paused: bool,
    result: Option<QuizResult>,
}

impl QuizSession {
    pub fn start(quiz: Quiz) -> Self {
        Self::start_at(quiz, Utc::now())
    }

    pub fn start_at(quiz: Quiz, now: DateTime<Utc>) -> Self {
        let remaining_secs = quiz.estimated_minutes * 60;
        Self {
            quiz,
            current_index: 0,
            selected: HashMap::new(),
            started_at: now,
            remaining_secs,
            show_explanation: false,
            paused: false,
            result: None,
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.quiz.questions.get(self.current_index)
    }

    /// Records the user's choice for a question; a later call for the same
    /// question overwrites the earlier one. An unknown question id or an
    /// option index past the end is a logged no-op.
    pub fn select_answer(&mut self, question_id: &str, option_index: usize) {
        if self.is_completed() {
            log::warn!("select_answer after completion of quiz `{}`", self.quiz.id);
            return;
        }
        let Some(question) = self.quiz.questions.iter().find(|q| q.id == question_id) else {
            log::warn!("select_answer: unknown question id `{question_id}`");
            return;
        };
        if option_index >= question.options.len() {
            log::warn!(
                "select_answer: option {option_index} out of range for question `{question_id}`"
            );
            return;
        }
        self.selected.insert(question_id.to_string(), option_index);
    }

    pub fn selected_answer(&self, question_id: &str) -> Option<usize> {
        self.selected.get(question_id).copied()
    }

    pub fn is_answer_correct(&self, question_id: &str, option_index: usize) -> bool {
        self.quiz
            .questions
            .iter()
            .find(|q| q.id == question_id)
            .map(|q| q.correct_index == option_index)
            .unwrap_or(false)
    }

    pub fn toggle_explanation(&mut self) {
        self.show_explanation = !self.show_explanation;
    }

    pub fn explanation_visible(&self) -> bool {
        self.show_explanation
    }

    pub fn answered_count(&self) -> usize {
        self.quiz
            .questions
            .iter()
            .filter(|q| self.selected.contains_key(&q.id))
            .count()
    }

    pub fn is_current_answered(&self) -> bool {
        self.current_question()
            .map(|q| self.selected.contains_key(&q.id))
            .unwrap_or(false)
    }

    pub fn can_advance(&self) -> bool {
        self.is_current_answered()
    }

    pub fn progress_fraction(&self) -> f64 {
        if self.quiz.questions.is_empty() {
            return 0.0;
        }
        (self.current_index + 1) as f64 / self.quiz.questions.len() as f64
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_completed(&self) -> bool {
        self.result.is_some()
    }

    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }
}
