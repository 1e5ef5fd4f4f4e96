//! Question HTTP Handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::application::{DeleteQuestion, ListQuestions};
use crate::domain::{category_map, paginate, Question};
use crate::infrastructure::http::dto::{ApiResponse, Page, QuestionsPayload, QuestionsRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: BTreeMap<i64, String>,
}

#[derive(Debug, Serialize)]
pub struct DeletedQuestionResponse {
    pub deleted: i64,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct CreatedQuestionResponse {
    pub created: i64,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct SearchResultsResponse {
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

// ============================================================================
// Handlers
// ============================================================================

/// 获取题目列表（分页）及分类映射
pub async fn list_questions(
    State(state): State<Arc<AppState>>,
    Page(page): Page,
) -> Result<Json<ApiResponse<QuestionsResponse>>, ApiError> {
    let result = state.list_questions_handler.handle(ListQuestions).await?;

    Ok(Json(ApiResponse::success(QuestionsResponse {
        questions: paginate(&result.questions, page),
        total_questions: result.questions.len(),
        categories: category_map(&result.categories),
    })))
}

/// 删除题目，返回剩余题目
pub async fn delete_question(
    State(state): State<Arc<AppState>>,
    question_id: Result<Path<i64>, PathRejection>,
    Page(page): Page,
) -> Result<Json<ApiResponse<DeletedQuestionResponse>>, ApiError> {
    let Path(question_id) = question_id?;

    let result = state
        .delete_question_handler
        .handle(DeleteQuestion { question_id })
        .await?;

    Ok(Json(ApiResponse::success(DeletedQuestionResponse {
        deleted: result.deleted,
        questions: paginate(&result.questions, page),
        total_questions: result.questions.len(),
    })))
}

/// 搜索或创建题目
///
/// 请求体带非空 `searchTerm` 时按题目文本搜索，否则创建新题目
pub async fn search_or_create_question(
    State(state): State<Arc<AppState>>,
    Page(page): Page,
    payload: Result<Json<QuestionsPayload>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(payload) = payload?;

    match payload.into_request()? {
        QuestionsRequest::Search(query) => {
            let questions = state.search_questions_handler.handle(query).await?;

            Ok(Json(ApiResponse::success(SearchResultsResponse {
                questions: paginate(&questions, page),
                total_questions: questions.len(),
            }))
            .into_response())
        }
        QuestionsRequest::Create(command) => {
            let result = state.create_question_handler.handle(command).await?;

            Ok(Json(ApiResponse::success(CreatedQuestionResponse {
                created: result.created,
                questions: paginate(&result.questions, page),
                total_questions: result.questions.len(),
            }))
            .into_response())
        }
    }
}
