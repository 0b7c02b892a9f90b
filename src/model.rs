use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum QuizCategory {
    BusinessStrategy,
    MarketTrends,
    Entrepreneurship,
    Innovation,
    Leadership,
    Finance,
    Technology,
    Marketing,
}

impl QuizCategory {
    pub const ALL: [QuizCategory; 8] = [
        QuizCategory::BusinessStrategy,
        QuizCategory::MarketTrends,
        QuizCategory::Entrepreneurship,
        QuizCategory::Innovation,
        QuizCategory::Leadership,
        QuizCategory::Finance,
        QuizCategory::Technology,
        QuizCategory::Marketing,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QuizCategory::BusinessStrategy => "Business Strategy",
            QuizCategory::MarketTrends => "Market Trends",
            QuizCategory::Entrepreneurship => "Entrepreneurship",
            QuizCategory::Innovation => "Innovation",
            QuizCategory::Leadership => "Leadership",
            QuizCategory::Finance => "Finance",
            QuizCategory::Technology => "Technology",
            QuizCategory::Marketing => "Marketing",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
            Difficulty::Expert => "Expert",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub category: QuizCategory,
    pub description: String,
    pub difficulty: Difficulty,
    pub estimated_minutes: u32,
    pub questions: Vec<Question>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// One completed attempt. Append-only once recorded.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QuizResult {
    pub id: Uuid,
    pub quiz_id: String,
    pub quiz_title: String,
    pub score: u32,
    pub total_questions: u32,
    pub percentage: f64,
    pub completed_at: DateTime<Utc>,
    pub time_taken_secs: u64,
}

impl QuizResult {
    pub fn new(
        quiz_id: String,
        quiz_title: String,
        score: u32,
        total_questions: u32,
        completed_at: DateTime<Utc>,
        time_taken_secs: u64,
    ) -> Self {
        let percentage = if total_questions > 0 {
            f64::from(score) / f64::from(total_questions) * 100.0
        } else {
            0.0
        };
        Self {
            id: Uuid::new_v4(),
            quiz_id,
            quiz_title,
            score,
            total_questions,
            percentage,
            completed_at,
            time_taken_secs,
        }
    }
}
