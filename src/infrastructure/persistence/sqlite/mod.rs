//! SQLite Persistence - SQLite 数据库持久化实现

mod category_repo;
mod database;
mod question_repo;
mod seed;

pub use category_repo::*;
pub use database::*;
pub use question_repo::*;
pub use seed::*;
