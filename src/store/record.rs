use super::*;

impl<S: Storage> ProgressStore<S> {
    /// Records a completed attempt: appends it to history, accumulates the
    /// total score, re-derives the streak, evaluates achievement unlocks,
    /// then persists. Returns the achievements this result unlocked. On a
    /// storage failure the in-memory update stands and the error is handed
    /// back for the caller to surface.
    pub fn record_result(&mut self, result: QuizResult) -> Result<Vec<Achievement>, StorageError> {
        self.record_result_on(result, Local::now().date_naive(), Utc::now())
    }

    /// `today` is the calendar day the result lands on; `now` stamps any
    /// unlocked achievements. Split out so day-boundary behavior is testable.
    pub fn record_result_on(
        &mut self,
        result: QuizResult,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<Vec<Achievement>, StorageError> {
        self.progress.total_score += result.score;
        self.progress.completed_quizzes.push(result);
        self.update_streak(today);
        let unlocked = self.check_achievements(now);
        self.persist()?;
        Ok(unlocked)
    }

    /// The streak grows by one the first time the user plays on a day that
    /// directly follows the previous played day. Same-day repeats leave it
    /// alone; a gap of more than one day starts over at 1.
    fn update_streak(&mut self, today: NaiveDate) {
        self.progress.streak = match self.progress.last_played {
            None => 1,
            Some(last_day) => {
                let days = (today - last_day).num_days();
                if days == 1 {
                    self.progress.streak + 1
                } else if days > 1 {
                    1
                } else {
                    // same day, or a clock that went backwards
                    self.progress.streak
                }
            }
        };
        self.progress.last_played = Some(today);
    }

    fn check_achievements(&mut self, now: DateTime<Utc>) -> Vec<Achievement> {
        let mut unlocked = Vec::new();

        if self.progress.completed_quizzes.len() == 1 {
            self.unlock(AchievementKind::FirstQuiz, now, &mut unlocked);
        }
        let perfect = self
            .progress
            .completed_quizzes
            .last()
            .is_some_and(|r| r.percentage == 100.0);
        if perfect {
            self.unlock(AchievementKind::PerfectScore, now, &mut unlocked);
        }
        if self.progress.streak >= 7 {
            self.unlock(AchievementKind::WeekStreak, now, &mut unlocked);
        }
        if self.progress.streak >= 30 {
            self.unlock(AchievementKind::MonthStreak, now, &mut unlocked);
        }
        if self.progress.completed_quizzes.len() >= 10 {
            self.unlock(AchievementKind::TenQuizzes, now, &mut unlocked);
        }
        if self.progress.completed_quizzes.len() >= 50 {
            self.unlock(AchievementKind::FiftyQuizzes, now, &mut unlocked);
        }

        unlocked
    }

    fn unlock(&mut self, kind: AchievementKind, now: DateTime<Utc>, unlocked: &mut Vec<Achievement>) {
        if self.progress.achievements.iter().any(|a| a.kind == kind) {
            return;
        }
        let achievement = Achievement {
            kind,
            unlocked_at: now,
        };
        self.progress.achievements.push(achievement.clone());
        unlocked.push(achievement);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use chrono::TimeZone;

    fn result_for(quiz_id: &str, score: u32, total: u32) -> QuizResult {
        QuizResult::new(
            quiz_id.into(),
            quiz_id.to_uppercase(),
            score,
            total,
            Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
            300,
        )
    }

    fn day(n: u64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap() + chrono::Days::new(n)
    }

    fn store() -> ProgressStore<MemoryStorage> {
        ProgressStore::load(MemoryStorage::new())
    }

    #[test]
    fn first_perfect_result_unlocks_first_quiz_and_perfect_score() {
        let mut store = store();
        let unlocked = store
            .record_result_on(result_for("a", 5, 5), day(0), Utc::now())
            .expect("save ok");

        let kinds: Vec<_> = unlocked.iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            vec![AchievementKind::FirstQuiz, AchievementKind::PerfectScore]
        );
        assert_eq!(store.completed_quizzes().len(), 1);
        assert_eq!(store.total_score(), 5);
        assert_eq!(store.streak(), 1);
    }

    #[test]
    fn same_day_repeat_leaves_streak_unchanged() {
        let mut store = store();
        store
            .record_result_on(result_for("a", 1, 5), day(0), Utc::now())
            .expect("save ok");
        store
            .record_result_on(result_for("b", 1, 5), day(0), Utc::now())
            .expect("save ok");
        assert_eq!(store.streak(), 1);
    }

    #[test]
    fn next_day_increments_streak_by_one() {
        let mut store = store();
        store
            .record_result_on(result_for("a", 1, 5), day(0), Utc::now())
            .expect("save ok");
        store
            .record_result_on(result_for("b", 1, 5), day(1), Utc::now())
            .expect("save ok");
        assert_eq!(store.streak(), 2);
    }

    #[test]
    fn gap_of_two_days_resets_streak_to_one() {
        let mut store = store();
        store
            .record_result_on(result_for("a", 1, 5), day(0), Utc::now())
            .expect("save ok");
        store
            .record_result_on(result_for("b", 1, 5), day(1), Utc::now())
            .expect("save ok");
        store
            .record_result_on(result_for("c", 1, 5), day(3), Utc::now())
            .expect("save ok");
        assert_eq!(store.streak(), 1);
    }

    #[test]
    fn seventh_consecutive_day_unlocks_week_streak() {
        let mut store = store();
        for n in 0..6 {
            store
                .record_result_on(result_for(&format!("q{n}"), 1, 5), day(n), Utc::now())
                .expect("save ok");
        }
        assert_eq!(store.streak(), 6);

        let unlocked = store
            .record_result_on(result_for("q6", 1, 5), day(6), Utc::now())
            .expect("save ok");
        assert_eq!(store.streak(), 7);
        assert!(unlocked.iter().any(|a| a.kind == AchievementKind::WeekStreak));
    }

    #[test]
    fn achievements_unlock_at_most_once() {
        let mut store = store();
        for n in 0..12 {
            store
                .record_result_on(result_for(&format!("q{n}"), 5, 5), day(0), Utc::now())
                .expect("save ok");
        }
        for kind in AchievementKind::ALL {
            let count = store
                .achievements()
                .iter()
                .filter(|a| a.kind == kind)
                .count();
            assert!(count <= 1, "{kind:?} unlocked {count} times");
        }
        assert!(
            store
                .achievements()
                .iter()
                .any(|a| a.kind == AchievementKind::TenQuizzes)
        );
    }

    #[test]
    fn empty_quiz_result_is_not_a_perfect_score() {
        let mut store = store();
        let unlocked = store
            .record_result_on(result_for("a", 0, 0), day(0), Utc::now())
            .expect("save ok");
        assert!(
            !unlocked
                .iter()
                .any(|a| a.kind == AchievementKind::PerfectScore)
        );
    }

    #[test]
    fn backwards_clock_counts_as_same_day() {
        let mut store = store();
        store
            .record_result_on(result_for("a", 1, 5), day(5), Utc::now())
            .expect("save ok");
        store
            .record_result_on(result_for("b", 1, 5), day(2), Utc::now())
            .expect("save ok");
        assert_eq!(store.streak(), 1);
        assert_eq!(store.progress().last_played, Some(day(2)));
    }
}
