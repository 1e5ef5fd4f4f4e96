//! Application State
//!
//! 启动时显式构建，通过 axum `State` 传入各 handler

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateQuestionHandler, DeleteQuestionHandler,
    // Query handlers
    GetCategoryQuestionsHandler, ListCategoriesHandler, ListQuestionsHandler,
    NextQuizQuestionHandler, SearchQuestionsHandler,
    // Ports
    CategoryRepositoryPort, QuestionRepositoryPort,
};

/// 应用状态
///
/// 除连接池外不持有任何跨请求的可变状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub create_question_handler: CreateQuestionHandler,
    pub delete_question_handler: DeleteQuestionHandler,

    // ========== Query Handlers ==========
    pub list_categories_handler: ListCategoriesHandler,
    pub get_category_questions_handler: GetCategoryQuestionsHandler,
    pub list_questions_handler: ListQuestionsHandler,
    pub search_questions_handler: SearchQuestionsHandler,
    pub next_quiz_question_handler: NextQuizQuestionHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        category_repo: Arc<dyn CategoryRepositoryPort>,
        question_repo: Arc<dyn QuestionRepositoryPort>,
    ) -> Self {
        Self {
            // Command handlers
            create_question_handler: CreateQuestionHandler::new(question_repo.clone()),
            delete_question_handler: DeleteQuestionHandler::new(question_repo.clone()),

            // Query handlers
            list_categories_handler: ListCategoriesHandler::new(category_repo.clone()),
            get_category_questions_handler: GetCategoryQuestionsHandler::new(
                category_repo.clone(),
                question_repo.clone(),
            ),
            list_questions_handler: ListQuestionsHandler::new(
                category_repo.clone(),
                question_repo.clone(),
            ),
            search_questions_handler: SearchQuestionsHandler::new(question_repo.clone()),
            next_quiz_question_handler: NextQuizQuestionHandler::new(question_repo),
        }
    }
}
