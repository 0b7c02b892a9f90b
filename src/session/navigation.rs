use super::*;

impl QuizSession {
    /// Moves to the next question, or completes the attempt when already on
    /// the last one. Clears the explanation flag on a move.
    pub fn advance(&mut self) {
        self.advance_at(Utc::now());
    }

    pub fn advance_at(&mut self, now: DateTime<Utc>) {
        if self.is_completed() {
            return;
        }
        if self.current_index + 1 < self.quiz.questions.len() {
            self.current_index += 1;
            self.show_explanation = false;
        } else {
            self.complete_at(now);
        }
    }

    /// Moves back one question. Recorded answers are untouched.
    pub fn retreat(&mut self) {
        if self.current_index > 0 {
            self.current_index -= 1;
            self.show_explanation = false;
        }
    }

    /// Jumps straight to a question. Out-of-range indices are ignored.
    pub fn jump_to(&mut self, index: usize) {
        if index < self.quiz.questions.len() {
            self.current_index = index;
            self.show_explanation = false;
        }
    }
}
