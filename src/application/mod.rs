//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（Category / Question Repository）
//! - commands: CQRS 命令及处理器（创建、删除题目）
//! - queries: CQRS 查询及处理器（分类、题目列表、搜索、测验出题）
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Question commands
    CreateQuestion,
    DeleteQuestion,
    // Handlers
    handlers::{
        CreateQuestionHandler, CreateQuestionResponse, DeleteQuestionHandler,
        DeleteQuestionResponse,
    },
};

pub use error::ApplicationError;

pub use ports::{CategoryRepositoryPort, QuestionRepositoryPort, RepositoryError};

pub use queries::{
    // Category queries
    GetCategoryQuestions,
    ListCategories,
    // Question queries
    ListQuestions,
    SearchQuestions,
    // Quiz queries
    NextQuizQuestion,
    // Handlers
    handlers::{
        CategoryQuestionsResponse, GetCategoryQuestionsHandler, ListCategoriesHandler,
        ListQuestionsHandler, ListQuestionsResponse, NextQuizQuestionHandler,
        SearchQuestionsHandler,
    },
};
