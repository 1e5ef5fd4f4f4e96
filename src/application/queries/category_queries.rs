//! Category Queries

/// 列出所有分类查询
#[derive(Debug, Clone)]
pub struct ListCategories;

/// 获取分类下题目查询
#[derive(Debug, Clone)]
pub struct GetCategoryQuestions {
    pub category_id: i64,
}
