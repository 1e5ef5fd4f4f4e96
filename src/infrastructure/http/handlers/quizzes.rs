//! Quiz HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::domain::Question;
use crate::infrastructure::http::dto::{ApiResponse, QuizPayload};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub question: Question,
}

/// 随机获取下一道测验题目（排除已出过的题目）
pub async fn next_quiz_question(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<QuizPayload>, JsonRejection>,
) -> Result<Json<ApiResponse<QuizResponse>>, ApiError> {
    let Json(payload) = payload?;
    let query = payload.into_query()?;

    let question = state.next_quiz_question_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(QuizResponse { question })))
}
