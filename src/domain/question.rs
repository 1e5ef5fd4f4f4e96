//! Question - 题目

use serde::Serialize;

/// 题目
///
/// 序列化结果即对外的 JSON 表示：`id, question, answer, category, difficulty`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    /// 所属分类 id（不校验分类是否存在）
    pub category: i64,
    pub difficulty: i64,
}

/// 待创建的题目，id 由存储层分配
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl NewQuestion {
    /// 绑定存储层分配的 id
    pub fn with_id(self, id: i64) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}
