//! 应用层错误定义
//!
//! 统一的命令/查询错误类型，HTTP 层只区分 NotFound 与 Unprocessable 两类

use thiserror::Error;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// 结果集为空（列表类查询视为未找到）
    #[error("No {0} available")]
    Empty(&'static str),

    /// 缺少必填字段
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// 字段值无法处理
    #[error("Invalid value: {0}")]
    InvalidInput(String),

    /// 搜索无结果
    #[error("No questions match search term: {0}")]
    NoSearchResults(String),

    /// 可选题目已全部出过
    #[error("No quiz question left to ask")]
    QuizExhausted,

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// 创建字段值错误
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// 是否属于 "未找到" 类错误（对应 404）
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::Empty(_) | Self::MissingField(_)
        )
    }
}

impl From<crate::application::ports::RepositoryError> for ApplicationError {
    fn from(err: crate::application::ports::RepositoryError) -> Self {
        match err {
            crate::application::ports::RepositoryError::NotFound(id) => {
                Self::not_found("Question", id)
            }
            other => Self::RepositoryError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::RepositoryError;

    #[test]
    fn test_not_found_class() {
        assert!(ApplicationError::not_found("Category", 1000).is_not_found());
        assert!(ApplicationError::Empty("categories").is_not_found());
        assert!(ApplicationError::MissingField("answer").is_not_found());
        assert!(!ApplicationError::QuizExhausted.is_not_found());
        assert!(!ApplicationError::NoSearchResults("zzz".to_string()).is_not_found());
        assert!(!ApplicationError::invalid_input("bad").is_not_found());
    }

    #[test]
    fn test_repository_error_conversion() {
        let err: ApplicationError = RepositoryError::DatabaseError("disk I/O".to_string()).into();
        assert!(matches!(err, ApplicationError::RepositoryError(_)));

        let err: ApplicationError = RepositoryError::NotFound("7".to_string()).into();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Question not found: 7");
    }
}
