//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Category, NewQuestion, Question};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

// ============================================================================
// Category Repository
// ============================================================================

/// Category Repository Port
#[async_trait]
pub trait CategoryRepositoryPort: Send + Sync {
    /// 获取所有分类（按 id 排序）
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError>;

    /// 根据 ID 查找分类
    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, RepositoryError>;
}

// ============================================================================
// Question Repository
// ============================================================================

/// Question Repository Port
#[async_trait]
pub trait QuestionRepositoryPort: Send + Sync {
    /// 获取所有题目（按 id 排序）
    async fn find_all(&self) -> Result<Vec<Question>, RepositoryError>;

    /// 根据 ID 查找题目
    async fn find_by_id(&self, id: i64) -> Result<Option<Question>, RepositoryError>;

    /// 获取指定分类下的题目
    async fn find_by_category(&self, category_id: i64) -> Result<Vec<Question>, RepositoryError>;

    /// 题目文本不区分大小写的子串搜索
    async fn search(&self, term: &str) -> Result<Vec<Question>, RepositoryError>;

    /// 随机取一道题目，排除 `excluded` 中的 id；`category_id` 为 None 时不限分类
    async fn find_random(
        &self,
        category_id: Option<i64>,
        excluded: &[i64],
    ) -> Result<Option<Question>, RepositoryError>;

    /// 插入题目，返回新分配的 id
    async fn insert(&self, question: &NewQuestion) -> Result<i64, RepositoryError>;

    /// 删除题目
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
