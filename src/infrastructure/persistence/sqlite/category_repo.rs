//! SQLite Category Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{CategoryRepositoryPort, RepositoryError};
use crate::domain::Category;

/// SQLite Category Repository
pub struct SqliteCategoryRepository {
    pool: DbPool,
}

impl SqliteCategoryRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct CategoryRow {
    id: i64,
    kind: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category::new(row.id, row.kind)
    }
}

#[async_trait]
impl CategoryRepositoryPort for SqliteCategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError> {
        let rows: Vec<CategoryRow> =
            sqlx::query_as("SELECT id, type AS kind FROM categories ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, RepositoryError> {
        let row: Option<CategoryRow> =
            sqlx::query_as("SELECT id, type AS kind FROM categories WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(row.map(Category::from))
    }
}
