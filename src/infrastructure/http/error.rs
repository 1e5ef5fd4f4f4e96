//! HTTP Error Handling
//!
//! 所有失败统一映射为两类：404 resource not found / 422 unprocessable。
//! 路由存在但方法不匹配时返回同格式的 405 信封

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: &'static str,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: &'static str) -> Self {
        Self {
            success: false,
            error: status.as_u16(),
            message,
        }
    }
}

/// 错误信息定义
pub mod message {
    pub const NOT_FOUND: &str = "resource not found";
    pub const UNPROCESSABLE: &str = "unprocessable";
    pub const METHOD_NOT_ALLOWED: &str = "method not allowed";
}

/// API 错误
///
/// 内部携带的描述只写入日志，不返回给客户端
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Unprocessable(String),
    MethodNotAllowed(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let response = match &self {
            ApiError::NotFound(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Resource not found");
                ErrorResponse::new(status, message::NOT_FOUND)
            }
            ApiError::Unprocessable(msg) => {
                tracing::error!(status = status.as_u16(), error = %msg, "Unprocessable request");
                ErrorResponse::new(status, message::UNPROCESSABLE)
            }
            ApiError::MethodNotAllowed(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Method not allowed");
                ErrorResponse::new(status, message::METHOD_NOT_ALLOWED)
            }
        };

        (status, Json(response)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        if e.is_not_found() {
            ApiError::NotFound(e.to_string())
        } else {
            ApiError::Unprocessable(e.to_string())
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Unprocessable(rejection.body_text())
    }
}

/// 路径参数不是整数时按路由不存在处理
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::NotFound(rejection.body_text())
    }
}
