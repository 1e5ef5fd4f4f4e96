//! Data Transfer Objects
//!
//! 请求体在 handler 入口处一次性校验为类型化的命令/查询：
//! 缺少必填字段 -> `MissingField`（404），字段值无法解析 -> `InvalidInput`（422）

use std::convert::Infallible;

use axum::async_trait;
use axum::extract::{FromRequestParts, Query};
use http::request::Parts;
use http::Uri;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::{ApplicationError, CreateQuestion, NextQuizQuestion, SearchQuestions};
use crate::domain::{NewQuestion, QuizCategory};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 成功响应信封：`{"success": true, ...data}`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

// ============================================================================
// 分页参数
// ============================================================================

/// `?page=N` 查询参数
///
/// 从不拒绝请求：缺省、无法解析或重复出现时都能得到一个页码。
/// 多个 `page` 只取第一个，第一个无法解析时为 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(pub i64);

impl Default for Page {
    fn default() -> Self {
        Self(1)
    }
}

impl Page {
    pub fn from_uri(uri: &Uri) -> Self {
        Query::<Vec<(String, String)>>::try_from_uri(uri)
            .ok()
            .and_then(|Query(pairs)| pairs.into_iter().find(|(key, _)| key == "page"))
            .and_then(|(_, value)| value.trim().parse().ok())
            .map(Self)
            .unwrap_or_default()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Page
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_uri(&parts.uri))
    }
}

// ============================================================================
// POST /questions
// ============================================================================

/// POST /questions 请求体：带 `searchTerm` 为搜索，否则为创建
#[derive(Debug, Default, Deserialize)]
pub struct QuestionsPayload {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<Value>,
    #[serde(default)]
    pub question: Option<Value>,
    #[serde(default)]
    pub answer: Option<Value>,
    #[serde(default)]
    pub category: Option<Value>,
    #[serde(default)]
    pub difficulty: Option<Value>,
}

/// 校验后的 POST /questions 请求
#[derive(Debug, Clone)]
pub enum QuestionsRequest {
    Search(SearchQuestions),
    Create(CreateQuestion),
}

impl QuestionsPayload {
    pub fn into_request(self) -> Result<QuestionsRequest, ApplicationError> {
        match self.search_term {
            Some(Value::String(term)) if !term.is_empty() => {
                return Ok(QuestionsRequest::Search(SearchQuestions { term }));
            }
            Some(Value::String(_)) | None => {}
            Some(other) => {
                return Err(ApplicationError::invalid_input(format!(
                    "searchTerm must be a string, got {}",
                    other
                )));
            }
        }

        // 先检查字段是否齐全，再检查取值
        let question = require(self.question, "question")?;
        let answer = require(self.answer, "answer")?;
        let category = require(self.category, "category")?;
        let difficulty = require(self.difficulty, "difficulty")?;

        Ok(QuestionsRequest::Create(CreateQuestion {
            question: NewQuestion {
                question: as_text(question, "question")?,
                answer: as_text(answer, "answer")?,
                category: as_integer(&category, "category")?,
                difficulty: as_integer(&difficulty, "difficulty")?,
            },
        }))
    }
}

// ============================================================================
// POST /quizzes
// ============================================================================

/// POST /quizzes 请求体
#[derive(Debug, Default, Deserialize)]
pub struct QuizPayload {
    #[serde(default)]
    pub previous_questions: Option<Value>,
    #[serde(default)]
    pub quiz_category: Option<Value>,
}

impl QuizPayload {
    pub fn into_query(self) -> Result<NextQuizQuestion, ApplicationError> {
        let previous = require(self.previous_questions, "previous_questions")?;
        let quiz_category = require(self.quiz_category, "quiz_category")?;

        let previous_questions = match previous {
            Value::Array(items) => items
                .iter()
                .map(|item| as_integer(item, "previous_questions[]"))
                .collect::<Result<Vec<_>, _>>()?,
            other => {
                return Err(ApplicationError::invalid_input(format!(
                    "previous_questions must be a list, got {}",
                    other
                )));
            }
        };

        let category_id = match &quiz_category {
            Value::Object(fields) => fields
                .get("id")
                .ok_or_else(|| ApplicationError::invalid_input("quiz_category.id is missing"))
                .and_then(|id| as_integer(id, "quiz_category.id"))?,
            other => {
                return Err(ApplicationError::invalid_input(format!(
                    "quiz_category must be an object, got {}",
                    other
                )));
            }
        };

        Ok(NextQuizQuestion {
            previous_questions,
            category: QuizCategory::from_id(category_id),
        })
    }
}

// ============================================================================
// 字段校验
// ============================================================================

fn require(value: Option<Value>, field: &'static str) -> Result<Value, ApplicationError> {
    value.ok_or(ApplicationError::MissingField(field))
}

fn as_text(value: Value, field: &str) -> Result<String, ApplicationError> {
    match value {
        Value::String(text) => Ok(text),
        other => Err(ApplicationError::invalid_input(format!(
            "{} must be a string, got {}",
            field, other
        ))),
    }
}

/// 整数字段同时接受 JSON 整数和整数字符串（如 `"3"`）
fn as_integer(value: &Value, field: &str) -> Result<i64, ApplicationError> {
    let parsed = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| {
        ApplicationError::invalid_input(format!("{} must be an integer, got {}", field, value))
    })
}
