//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：处理题目的创建与删除

mod question_commands;

pub mod handlers;

pub use question_commands::*;
