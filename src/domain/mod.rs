//! Domain Layer - 领域层
//!
//! 包含问答系统的核心概念:
//! - Category: 题目分类
//! - Question: 题目
//! - Pagination: 题目列表分页
//! - Quiz: 测验出题的类别选择

mod category;
mod pagination;
mod question;
mod quiz;

pub use category::{category_map, Category};
pub use pagination::{paginate, QUESTIONS_PER_PAGE};
pub use question::{NewQuestion, Question};
pub use quiz::QuizCategory;
