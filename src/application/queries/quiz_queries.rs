//! Quiz Queries

use crate::domain::QuizCategory;

/// 获取下一道测验题目
#[derive(Debug, Clone)]
pub struct NextQuizQuestion {
    /// 已经出过的题目 id
    pub previous_questions: Vec<i64>,
    pub category: QuizCategory,
}
