//! Question Commands

use crate::domain::NewQuestion;

/// 创建题目命令
#[derive(Debug, Clone)]
pub struct CreateQuestion {
    pub question: NewQuestion,
}

/// 删除题目命令
#[derive(Debug, Clone)]
pub struct DeleteQuestion {
    pub question_id: i64,
}
