use std::collections::HashSet;

use thiserror::Error;

use crate::model::Quiz;

/// Integrity failure in the static quiz bank. Always fatal: the bank ships
/// with the binary, so a bad entry is a build problem, not a runtime one.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse quiz bank: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("duplicate quiz id `{0}`")]
    DuplicateQuizId(String),
    #[error("duplicate question id `{question_id}` in quiz `{quiz_id}`")]
    DuplicateQuestionId { quiz_id: String, question_id: String },
    #[error("question `{question_id}` in quiz `{quiz_id}` has {count} options, need at least 2")]
    TooFewOptions {
        quiz_id: String,
        question_id: String,
        count: usize,
    },
    #[error(
        "question `{question_id}` in quiz `{quiz_id}` marks option {index} correct but only has {count} options"
    )]
    CorrectIndexOutOfRange {
        quiz_id: String,
        question_id: String,
        index: usize,
        count: usize,
    },
}

/// Loads the embedded quiz bank.
pub fn load_catalog() -> Result<Vec<Quiz>, CatalogError> {
    let file_content = include_str!("data/quizzes.yaml");
    parse_catalog(file_content)
}

pub fn parse_catalog(yaml: &str) -> Result<Vec<Quiz>, CatalogError> {
    let quizzes: Vec<Quiz> = serde_yaml::from_str(yaml)?;
    validate_catalog(&quizzes)?;
    Ok(quizzes)
}

fn validate_catalog(quizzes: &[Quiz]) -> Result<(), CatalogError> {
    let mut quiz_ids = HashSet::new();
    let mut question_ids = HashSet::new();

    for quiz in quizzes {
        if !quiz_ids.insert(quiz.id.as_str()) {
            return Err(CatalogError::DuplicateQuizId(quiz.id.clone()));
        }
        for question in &quiz.questions {
            if !question_ids.insert(question.id.as_str()) {
                return Err(CatalogError::DuplicateQuestionId {
                    quiz_id: quiz.id.clone(),
                    question_id: question.id.clone(),
                });
            }
            if question.options.len() < 2 {
                return Err(CatalogError::TooFewOptions {
                    quiz_id: quiz.id.clone(),
                    question_id: question.id.clone(),
                    count: question.options.len(),
                });
            }
            if question.correct_index >= question.options.len() {
                return Err(CatalogError::CorrectIndexOutOfRange {
                    quiz_id: quiz.id.clone(),
                    question_id: question.id.clone(),
                    index: question.correct_index,
                    count: question.options.len(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuizCategory;

    #[test]
    fn embedded_catalog_loads_and_validates() {
        let quizzes = load_catalog().expect("embedded bank is valid");
        assert_eq!(quizzes.len(), 6);
        assert!(quizzes.iter().all(|q| !q.questions.is_empty()));
    }

    #[test]
    fn embedded_catalog_leaves_some_categories_empty() {
        let quizzes = load_catalog().expect("embedded bank is valid");
        assert!(
            !quizzes
                .iter()
                .any(|q| q.category == QuizCategory::Technology)
        );
        assert!(!quizzes.iter().any(|q| q.category == QuizCategory::Marketing));
    }

    #[test]
    fn rejects_correct_index_out_of_range() {
        let yaml = r#"
- id: broken
  title: "Broken"
  category: Finance
  description: "Bad data"
  difficulty: Beginner
  estimated_minutes: 5
  questions:
    - id: broken-1
      prompt: "?"
      options: ["a", "b"]
      correct_index: 2
"#;
        let err = parse_catalog(yaml).unwrap_err();
        assert!(matches!(err, CatalogError::CorrectIndexOutOfRange { index: 2, .. }));
    }

    #[test]
    fn rejects_single_option_question() {
        let yaml = r#"
- id: broken
  title: "Broken"
  category: Finance
  description: "Bad data"
  difficulty: Beginner
  estimated_minutes: 5
  questions:
    - id: broken-1
      prompt: "?"
      options: ["only one"]
      correct_index: 0
"#;
        let err = parse_catalog(yaml).unwrap_err();
        assert!(matches!(err, CatalogError::TooFewOptions { count: 1, .. }));
    }

    #[test]
    fn rejects_duplicate_quiz_ids() {
        let yaml = r#"
- id: dup
  title: "One"
  category: Finance
  description: "d"
  difficulty: Beginner
  estimated_minutes: 5
  questions:
    - id: dup-1
      prompt: "?"
      options: ["a", "b"]
      correct_index: 0
- id: dup
  title: "Two"
  category: Finance
  description: "d"
  difficulty: Beginner
  estimated_minutes: 5
  questions:
    - id: dup-2
      prompt: "?"
      options: ["a", "b"]
      correct_index: 0
"#;
        let err = parse_catalog(yaml).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateQuizId(id) if id == "dup"));
    }
}
