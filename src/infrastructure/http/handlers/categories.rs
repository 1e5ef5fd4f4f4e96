//! Category HTTP Handlers

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::application::{GetCategoryQuestions, ListCategories};
use crate::domain::{category_map, paginate, Question};
use crate::infrastructure::http::dto::{ApiResponse, Page};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: BTreeMap<i64, String>,
    pub total_categories: usize,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// 获取所有分类
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<CategoriesResponse>>, ApiError> {
    let categories = state.list_categories_handler.handle(ListCategories).await?;

    Ok(Json(ApiResponse::success(CategoriesResponse {
        categories: category_map(&categories),
        total_categories: categories.len(),
    })))
}

/// 获取分类下的题目（分页）
pub async fn get_category_questions(
    State(state): State<Arc<AppState>>,
    category_id: Result<Path<i64>, PathRejection>,
    Page(page): Page,
) -> Result<Json<ApiResponse<CategoryQuestionsResponse>>, ApiError> {
    let Path(category_id) = category_id?;

    let result = state
        .get_category_questions_handler
        .handle(GetCategoryQuestions { category_id })
        .await?;

    Ok(Json(ApiResponse::success(CategoryQuestionsResponse {
        questions: paginate(&result.questions, page),
        total_questions: result.questions.len(),
        current_category: result.category.kind,
    })))
}
