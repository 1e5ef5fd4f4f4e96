//! Trivia API - 问答游戏 REST 后端
//!
//! 架构设计: CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Category, Question, 分页, 测验类别选择
//!
//! 应用层 (application/):
//! - Ports: Category / Question Repository
//! - Commands: 创建、删除题目
//! - Queries: 分类、题目列表、搜索、测验出题
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API（axum）
//! - Persistence: SQLite 存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
