//! Quiz Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::QuestionRepositoryPort;
use crate::application::queries::NextQuizQuestion;
use crate::domain::Question;

/// NextQuizQuestion Handler
///
/// 在未出过的题目中随机选一道；没有可选题目时返回 `QuizExhausted`
pub struct NextQuizQuestionHandler {
    question_repo: Arc<dyn QuestionRepositoryPort>,
}

impl NextQuizQuestionHandler {
    pub fn new(question_repo: Arc<dyn QuestionRepositoryPort>) -> Self {
        Self { question_repo }
    }

    pub async fn handle(&self, query: NextQuizQuestion) -> Result<Question, ApplicationError> {
        let question = self
            .question_repo
            .find_random(query.category.category_id(), &query.previous_questions)
            .await?
            .ok_or(ApplicationError::QuizExhausted)?;

        tracing::debug!(
            question_id = question.id,
            previous = query.previous_questions.len(),
            "Quiz question selected"
        );

        Ok(question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::QuizCategory;
    use crate::infrastructure::persistence::sqlite::{test_pool, SqliteQuestionRepository};

    async fn handler() -> NextQuizQuestionHandler {
        NextQuizQuestionHandler::new(Arc::new(SqliteQuestionRepository::new(test_pool().await)))
    }

    #[tokio::test]
    async fn test_question_from_requested_category() {
        let handler = handler().await;

        let question = handler
            .handle(NextQuizQuestion {
                previous_questions: vec![2],
                category: QuizCategory::from_id(1),
            })
            .await
            .unwrap();
        assert_eq!(question.category, 1);
    }

    #[tokio::test]
    async fn test_quiz_exhausts_category() {
        let handler = handler().await;
        let mut previous = Vec::new();

        // Sports 分类只有两道题
        for _ in 0..2 {
            let question = handler
                .handle(NextQuizQuestion {
                    previous_questions: previous.clone(),
                    category: QuizCategory::Only(6),
                })
                .await
                .unwrap();
            assert!(!previous.contains(&question.id));
            previous.push(question.id);
        }

        let err = handler
            .handle(NextQuizQuestion {
                previous_questions: previous,
                category: QuizCategory::Only(6),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::QuizExhausted));
    }

    #[tokio::test]
    async fn test_any_category_never_repeats() {
        let handler = handler().await;
        let mut previous = Vec::new();

        loop {
            match handler
                .handle(NextQuizQuestion {
                    previous_questions: previous.clone(),
                    category: QuizCategory::Any,
                })
                .await
            {
                Ok(question) => {
                    assert!(!previous.contains(&question.id));
                    previous.push(question.id);
                }
                Err(err) => {
                    assert!(matches!(err, ApplicationError::QuizExhausted));
                    break;
                }
            }
        }

        assert_eq!(previous.len(), 19);
    }
}
