use rand::seq::SliceRandom;

use crate::model::{Difficulty, Quiz, QuizCategory};
use crate::store::UserProgress;

/// Quizzes matching a free-text search plus optional exact category and
/// difficulty filters; every active filter must hold. The search is a
/// case-insensitive substring match over title, description and category
/// label, skipped entirely when the text is empty.
pub fn filter_quizzes<'a>(
    quizzes: &'a [Quiz],
    search: &str,
    category: Option<QuizCategory>,
    difficulty: Option<Difficulty>,
) -> Vec<&'a Quiz> {
    let needle = search.to_lowercase();
    quizzes
        .iter()
        .filter(|quiz| {
            needle.is_empty()
                || quiz.title.to_lowercase().contains(&needle)
                || quiz.description.to_lowercase().contains(&needle)
                || quiz.category.label().to_lowercase().contains(&needle)
        })
        .filter(|quiz| category.is_none_or(|c| quiz.category == c))
        .filter(|quiz| difficulty.is_none_or(|d| quiz.difficulty == d))
        .collect()
}

pub fn quizzes_for_category<'a>(quizzes: &'a [Quiz], category: QuizCategory) -> Vec<&'a Quiz> {
    quizzes.iter().filter(|q| q.category == category).collect()
}

/// Up to six not-yet-completed quizzes for the user: preferred categories
/// first, in preference order, then difficulty-matched backfill when that
/// comes up short of three.
pub fn recommended<'a>(quizzes: &'a [Quiz], progress: &UserProgress) -> Vec<&'a Quiz> {
    let mut picks: Vec<&Quiz> = Vec::new();

    for category in &progress.preferences.preferred_categories {
        picks.extend(
            quizzes
                .iter()
                .filter(|quiz| quiz.category == *category && !completed(progress, &quiz.id)),
        );
    }

    if picks.len() < 3 {
        let backfill: Vec<&Quiz> = quizzes
            .iter()
            .filter(|quiz| {
                quiz.difficulty == progress.preferences.difficulty
                    && !completed(progress, &quiz.id)
                    && !picks.iter().any(|p| p.id == quiz.id)
            })
            .collect();
        picks.extend(backfill);
    }

    picks.truncate(6);
    picks
}

/// The first few catalog entries, surfaced as a teaser shelf.
pub fn featured(quizzes: &[Quiz]) -> Vec<&Quiz> {
    quizzes.iter().take(3).collect()
}

/// Random sample standing in for completion-based popularity; there are no
/// cross-user statistics in a local store.
pub fn popular(quizzes: &[Quiz]) -> Vec<&Quiz> {
    let mut rng = rand::thread_rng();
    quizzes.choose_multiple(&mut rng, 4).collect()
}

/// One entry per non-empty category, in the fixed enumeration order.
pub fn categories_with_counts(quizzes: &[Quiz]) -> Vec<(QuizCategory, usize)> {
    QuizCategory::ALL
        .iter()
        .map(|&category| {
            (
                category,
                quizzes.iter().filter(|q| q.category == category).count(),
            )
        })
        .filter(|(_, count)| *count > 0)
        .collect()
}

/// Completed results per category, joined to the catalog by quiz id.
/// Categories the user has never finished a quiz in are omitted.
pub fn completed_count_by_category(
    quizzes: &[Quiz],
    progress: &UserProgress,
) -> Vec<(QuizCategory, usize)> {
    QuizCategory::ALL
        .iter()
        .map(|&category| {
            let count = progress
                .completed_quizzes
                .iter()
                .filter(|result| {
                    quizzes
                        .iter()
                        .any(|q| q.id == result.quiz_id && q.category == category)
                })
                .count();
            (category, count)
        })
        .filter(|(_, count)| *count > 0)
        .collect()
}

fn completed(progress: &UserProgress, quiz_id: &str) -> bool {
    progress
        .completed_quizzes
        .iter()
        .any(|r| r.quiz_id == quiz_id)
}
