//! Category Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{CategoryRepositoryPort, QuestionRepositoryPort};
use crate::application::queries::{GetCategoryQuestions, ListCategories};
use crate::domain::{Category, Question};

// ============================================================================
// Response DTOs
// ============================================================================

/// 分类题目响应
#[derive(Debug, Clone)]
pub struct CategoryQuestionsResponse {
    pub category: Category,
    pub questions: Vec<Question>,
}

// ============================================================================
// Handlers
// ============================================================================

/// ListCategories Handler
pub struct ListCategoriesHandler {
    category_repo: Arc<dyn CategoryRepositoryPort>,
}

impl ListCategoriesHandler {
    pub fn new(category_repo: Arc<dyn CategoryRepositoryPort>) -> Self {
        Self { category_repo }
    }

    pub async fn handle(&self, _query: ListCategories) -> Result<Vec<Category>, ApplicationError> {
        let categories = self.category_repo.find_all().await?;
        if categories.is_empty() {
            return Err(ApplicationError::Empty("categories"));
        }
        Ok(categories)
    }
}

/// GetCategoryQuestions Handler
pub struct GetCategoryQuestionsHandler {
    category_repo: Arc<dyn CategoryRepositoryPort>,
    question_repo: Arc<dyn QuestionRepositoryPort>,
}

impl GetCategoryQuestionsHandler {
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
        query: GetCategoryQuestions,
    ) -> Result<CategoryQuestionsResponse, ApplicationError> {
        let category = self
            .category_repo
            .find_by_id(query.category_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Category", query.category_id))?;

        let questions = self.question_repo.find_by_category(category.id).await?;
        if questions.is_empty() {
            return Err(ApplicationError::Empty("questions in category"));
        }

        Ok(CategoryQuestionsResponse {
            category,
            questions,
        })
    }
}
