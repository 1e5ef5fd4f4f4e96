//! Question Queries

/// 列出所有题目（附带分类映射）
#[derive(Debug, Clone)]
pub struct ListQuestions;

/// 按题目文本搜索
#[derive(Debug, Clone)]
pub struct SearchQuestions {
    pub term: String,
}
