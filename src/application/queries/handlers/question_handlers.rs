//! Question Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{CategoryRepositoryPort, QuestionRepositoryPort};
use crate::application::queries::{ListQuestions, SearchQuestions};
use crate::domain::{Category, Question};

/// 题目列表响应
#[derive(Debug, Clone)]
pub struct ListQuestionsResponse {
    pub questions: Vec<Question>,
    pub categories: Vec<Category>,
}

/// ListQuestions Handler
pub struct ListQuestionsHandler {
    category_repo: Arc<dyn CategoryRepositoryPort>,
    question_repo: Arc<dyn QuestionRepositoryPort>,
}

impl ListQuestionsHandler {
    pub fn new(
        category_repo: Arc<dyn CategoryRepositoryPort>,
        question_repo: Arc<dyn QuestionRepositoryPort>,
    ) -> Self {
        Self {
            category_repo,
            question_repo,
        }
    }

    pub async fn handle(
        &self,
        _query: ListQuestions,
    ) -> Result<ListQuestionsResponse, ApplicationError> {
        let questions = self.question_repo.find_all().await?;
        let categories = self.category_repo.find_all().await?;

        if questions.is_empty() {
            return Err(ApplicationError::Empty("questions"));
        }
        if categories.is_empty() {
            return Err(ApplicationError::Empty("categories"));
        }

        Ok(ListQuestionsResponse {
            questions,
            categories,
        })
    }
}

/// SearchQuestions Handler
///
/// 搜索无结果时返回 `NoSearchResults`（HTTP 422），而不是空列表
pub struct SearchQuestionsHandler {
    question_repo: Arc<dyn QuestionRepositoryPort>,
}

impl SearchQuestionsHandler {
    pub fn new(question_repo: Arc<dyn QuestionRepositoryPort>) -> Self {
        Self { question_repo }
    }

    pub async fn handle(&self, query: SearchQuestions) -> Result<Vec<Question>, ApplicationError> {
        let questions = self.question_repo.search(&query.term).await?;
        if questions.is_empty() {
            return Err(ApplicationError::NoSearchResults(query.term));
        }

        tracing::debug!(term = %query.term, matches = questions.len(), "Question search");

        Ok(questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::{
        empty_test_pool, test_pool, SqliteCategoryRepository, SqliteQuestionRepository,
    };

    #[tokio::test]
    async fn test_list_questions() {
        let pool = test_pool().await;
        let handler = ListQuestionsHandler::new(
            Arc::new(SqliteCategoryRepository::new(pool.clone())),
            Arc::new(SqliteQuestionRepository::new(pool)),
        );

        let result = handler.handle(ListQuestions).await.unwrap();
        assert_eq!(result.questions.len(), 19);
        assert_eq!(result.categories.len(), 6);
    }

    #[tokio::test]
    async fn test_list_questions_empty_store() {
        let pool = empty_test_pool().await;
        let handler = ListQuestionsHandler::new(
            Arc::new(SqliteCategoryRepository::new(pool.clone())),
            Arc::new(SqliteQuestionRepository::new(pool)),
        );

        let err = handler.handle(ListQuestions).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let handler =
            SearchQuestionsHandler::new(Arc::new(SqliteQuestionRepository::new(test_pool().await)));

        let result = handler
            .handle(SearchQuestions {
                term: "TOM".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(result.len(), 1);
        assert!(result[0].question.contains("Tom Hanks"));
    }

    #[tokio::test]
    async fn test_search_without_matches() {
        let handler =
            SearchQuestionsHandler::new(Arc::new(SqliteQuestionRepository::new(test_pool().await)));

        let err = handler
            .handle(SearchQuestions {
                term: "zzzzz_no_match".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NoSearchResults(_)));
    }
}
