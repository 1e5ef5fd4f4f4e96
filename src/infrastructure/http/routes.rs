//! HTTP Routes
//!
//! API Endpoints:
//! - /ping                             GET     健康检查
//! - /categories                       GET     列出所有分类
//! - /categories/{id}/questions        GET     分类下的题目（分页）
//! - /questions                        GET     题目列表（分页）
//! - /questions                        POST    搜索（searchTerm）或创建题目
//! - /questions/{id}                   DELETE  删除题目
//! - /quizzes                          POST    随机获取下一道测验题目
//!
//! 未匹配的路径返回 404 信封，已知路径上的其它方法返回 405 信封

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/categories", get(handlers::list_categories))
        .route(
            "/categories/:category_id/questions",
            get(handlers::get_category_questions),
        )
        .route(
            "/questions",
            get(handlers::list_questions).post(handlers::search_or_create_question),
        )
        .route("/questions/:question_id", delete(handlers::delete_question))
        .route("/quizzes", post(handlers::next_quiz_question))
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .fallback(handlers::fallback)
}
