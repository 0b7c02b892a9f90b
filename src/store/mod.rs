use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Difficulty, QuizCategory, QuizResult};
use crate::storage::{Storage, StorageError};

pub mod prefs;
pub mod queries;
pub mod record;

pub const STORAGE_KEY: &str = "quizzle_hub_progress";
const SAVE_VERSION: u32 = 1;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AchievementKind {
    FirstQuiz,
    PerfectScore,
    WeekStreak,
    MonthStreak,
    TenQuizzes,
    FiftyQuizzes,
}

impl AchievementKind {
    pub const ALL: [AchievementKind; 6] = [
        AchievementKind::FirstQuiz,
        AchievementKind::PerfectScore,
        AchievementKind::WeekStreak,
        AchievementKind::MonthStreak,
        AchievementKind::TenQuizzes,
        AchievementKind::FiftyQuizzes,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            AchievementKind::FirstQuiz => "First Quiz",
            AchievementKind::PerfectScore => "Perfect Score",
            AchievementKind::WeekStreak => "Week Streak",
            AchievementKind::MonthStreak => "Month Streak",
            AchievementKind::TenQuizzes => "Ten Quizzes",
            AchievementKind::FiftyQuizzes => "Fifty Quizzes",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AchievementKind::FirstQuiz => "Complete your first quiz",
            AchievementKind::PerfectScore => "Get 100% on a quiz",
            AchievementKind::WeekStreak => "Play for 7 days in a row",
            AchievementKind::MonthStreak => "Play for 30 days in a row",
            AchievementKind::TenQuizzes => "Complete 10 quizzes",
            AchievementKind::FiftyQuizzes => "Complete 50 quizzes",
        }
    }
}

/// Unlocked at most once per kind; `record.rs` guards the duplicates.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Achievement {
    pub kind: AchievementKind,
    pub unlocked_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserPreferences {
    pub preferred_categories: Vec<QuizCategory>,
    pub difficulty: Difficulty,
    pub notifications_enabled: bool,
    pub sound_enabled: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            preferred_categories: Vec::new(),
            difficulty: Difficulty::Beginner,
            notifications_enabled: true,
            sound_enabled: true,
        }
    }
}

/// Everything durable about one user. `last_played` is a calendar date in
/// the user's local timezone, fixed once at record time, so streak math
/// never re-derives a day from a timestamp under a different timezone.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct UserProgress {
    pub completed_quizzes: Vec<QuizResult>,
    pub favorite_categories: Vec<QuizCategory>,
    pub total_score: u32,
    pub streak: u32,
    pub last_played: Option<NaiveDate>,
    pub achievements: Vec<Achievement>,
    pub preferences: UserPreferences,
}

#[derive(Serialize, Deserialize)]
struct SavedProgress {
    version: u32,
    progress: UserProgress,
}

/// Durable per-user progress: the sole owner of result and achievement
/// history. Every mutating operation persists as its last step; the
/// in-memory state stays authoritative when a save fails.
pub struct ProgressStore<S: Storage> {
    progress: UserProgress,
    storage: S,
}

impl<S: Storage> ProgressStore<S> {
    /// Loads saved progress, or starts fresh when there is nothing usable.
    /// A missing blob, a decode failure, or an unknown version all degrade
    /// to an empty store; loading never fails the caller.
    pub fn load(storage: S) -> Self {
        let progress = match storage.load(STORAGE_KEY) {
            None => UserProgress::default(),
            Some(blob) => match serde_yaml::from_str::<SavedProgress>(&blob) {
                Ok(saved) if saved.version == SAVE_VERSION => saved.progress,
                Ok(saved) => {
                    log::warn!(
                        "saved progress has unsupported version {}, starting fresh",
                        saved.version
                    );
                    UserProgress::default()
                }
                Err(err) => {
                    log::warn!("could not decode saved progress, starting fresh: {err}");
                    UserProgress::default()
                }
            },
        };
        Self { progress, storage }
    }

    pub fn progress(&self) -> &UserProgress {
        &self.progress
    }

    pub(crate) fn persist(&mut self) -> Result<(), StorageError> {
        let saved = SavedProgress {
            version: SAVE_VERSION,
            progress: self.progress.clone(),
        };
        let blob = serde_yaml::to_string(&saved)?;
        self.storage.save(STORAGE_KEY, &blob)
    }
}
