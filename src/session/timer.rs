use super::*;

impl QuizSession {
    /// One countdown tick; the host drives this at one-second granularity.
    /// Reaching zero auto-completes the attempt and returns its result.
    /// Ticks are ignored while paused and after completion, which is the
    /// cancellation guarantee: a stale tick can never touch a finished
    /// attempt.
    pub fn tick(&mut self) -> Option<QuizResult> {
        self.tick_at(Utc::now())
    }

    pub fn tick_at(&mut self, now: DateTime<Utc>) -> Option<QuizResult> {
        if self.paused || self.is_completed() {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            return Some(self.complete_at(now));
        }
        None
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }
}
