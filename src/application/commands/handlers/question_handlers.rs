//! Question Command Handlers
//!
//! 写操作完成后返回刷新后的完整题目列表（按 id 排序），由 HTTP 层分页

use std::sync::Arc;

use crate::application::commands::{CreateQuestion, DeleteQuestion};
use crate::application::error::ApplicationError;
use crate::application::ports::QuestionRepositoryPort;
use crate::domain::Question;

// ============================================================================
// CreateQuestion
// ============================================================================

/// 创建题目响应
#[derive(Debug, Clone)]
pub struct CreateQuestionResponse {
    pub created: i64,
    pub questions: Vec<Question>,
}

/// CreateQuestion Handler
pub struct CreateQuestionHandler {
    question_repo: Arc<dyn QuestionRepositoryPort>,
}

impl CreateQuestionHandler {
    pub fn new(question_repo: Arc<dyn QuestionRepositoryPort>) -> Self {
        Self { question_repo }
    }

    pub async fn handle(
        &self,
        command: CreateQuestion,
    ) -> Result<CreateQuestionResponse, ApplicationError> {
        let id = self.question_repo.insert(&command.question).await?;

        tracing::info!(
            question_id = id,
            category = command.question.category,
            "Question created"
        );

        let questions = self.question_repo.find_all().await?;

        Ok(CreateQuestionResponse {
            created: id,
            questions,
        })
    }
}

// ============================================================================
// DeleteQuestion
// ============================================================================

/// 删除题目响应
#[derive(Debug, Clone)]
pub struct DeleteQuestionResponse {
    pub deleted: i64,
    pub questions: Vec<Question>,
}

/// DeleteQuestion Handler
pub struct DeleteQuestionHandler {
    question_repo: Arc<dyn QuestionRepositoryPort>,
}

impl DeleteQuestionHandler {
    pub fn new(question_repo: Arc<dyn QuestionRepositoryPort>) -> Self {
        Self { question_repo }
    }

    pub async fn handle(
        &self,
        command: DeleteQuestion,
    ) -> Result<DeleteQuestionResponse, ApplicationError> {
        let question_id = command.question_id;

        // 先确认题目存在，再执行删除
        self.question_repo
            .find_by_id(question_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Question", question_id))?;

        self.question_repo.delete(question_id).await?;

        tracing::info!(question_id, "Question deleted");

        let questions = self.question_repo.find_all().await?;

        Ok(DeleteQuestionResponse {
            deleted: question_id,
            questions,
        })
    }
}
