use super::*;

impl<S: Storage> ProgressStore<S> {
    pub fn total_score(&self) -> u32 {
        self.progress.total_score
    }

    pub fn streak(&self) -> u32 {
        self.progress.streak
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.progress.achievements
    }

    pub fn completed_quizzes(&self) -> &[QuizResult] {
        &self.progress.completed_quizzes
    }

    /// Mean percentage across all recorded results; 0 with no history.
    pub fn average_percentage(&self) -> f64 {
        let results = &self.progress.completed_quizzes;
        if results.is_empty() {
            return 0.0;
        }
        results.iter().map(|r| r.percentage).sum::<f64>() / results.len() as f64
    }

    pub fn has_completed(&self, quiz_id: &str) -> bool {
        self.progress
            .completed_quizzes
            .iter()
            .any(|r| r.quiz_id == quiz_id)
    }

    /// Highest-percentage result for a quiz; the latest one wins a tie.
    pub fn best_result(&self, quiz_id: &str) -> Option<&QuizResult> {
        let mut best: Option<&QuizResult> = None;
        for result in self
            .progress
            .completed_quizzes
            .iter()
            .filter(|r| r.quiz_id == quiz_id)
        {
            match best {
                Some(current) if result.percentage < current.percentage => {}
                _ => best = Some(result),
            }
        }
        best
    }
}
