//! Fallback Handlers

use axum::http::{Method, Uri};

use crate::infrastructure::http::error::ApiError;

/// 未匹配的路由返回 404 信封
pub async fn fallback(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}

/// 路由存在但方法不支持，返回 405 信封（`Allow` 头由路由补上）
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed(format!("{} {}", method, uri.path()))
}
