//! SQLite Question Repository

use async_trait::async_trait;
use sqlx::{FromRow, QueryBuilder, Sqlite};

use super::DbPool;
use crate::application::ports::{QuestionRepositoryPort, RepositoryError};
use crate::domain::{NewQuestion, Question};

const SELECT_QUESTIONS: &str =
    "SELECT id, question, answer, category, difficulty FROM questions";

/// SQLite Question Repository
pub struct SqliteQuestionRepository {
    pool: DbPool,
}

impl SqliteQuestionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct QuestionRow {
    id: i64,
    question: String,
    answer: String,
    category: i64,
    difficulty: i64,
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Question {
            id: row.id,
            question: row.question,
            answer: row.answer,
            category: row.category,
            difficulty: row.difficulty,
        }
    }
}

/// 转义 LIKE 通配符，使搜索词按字面匹配
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl QuestionRepositoryPort for SqliteQuestionRepository {
    async fn find_all(&self) -> Result<Vec<Question>, RepositoryError> {
        let rows: Vec<QuestionRow> = sqlx::query_as(&format!("{} ORDER BY id", SELECT_QUESTIONS))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Question>, RepositoryError> {
        let row: Option<QuestionRow> =
            sqlx::query_as(&format!("{} WHERE id = ?", SELECT_QUESTIONS))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(row.map(Question::from))
    }

    async fn find_by_category(&self, category_id: i64) -> Result<Vec<Question>, RepositoryError> {
        let rows: Vec<QuestionRow> =
            sqlx::query_as(&format!("{} WHERE category = ? ORDER BY id", SELECT_QUESTIONS))
                .bind(category_id)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>, RepositoryError> {
        // SQLite 的 LIKE 只对 ASCII 字符不区分大小写，其余情况在内存中按 Unicode 小写比较
        if !term.is_ascii() {
            let needle = term.to_lowercase();
            let questions = self.find_all().await?;
            return Ok(questions
                .into_iter()
                .filter(|q| q.question.to_lowercase().contains(&needle))
                .collect());
        }

        let rows: Vec<QuestionRow> = sqlx::query_as(&format!(
            r"{} WHERE question LIKE ? ESCAPE '\' ORDER BY id",
            SELECT_QUESTIONS
        ))
        .bind(like_pattern(term))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn find_random(
        &self,
        category_id: Option<i64>,
        excluded: &[i64],
    ) -> Result<Option<Question>, RepositoryError> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("{} WHERE 1 = 1", SELECT_QUESTIONS));

        if let Some(category_id) = category_id {
            builder.push(" AND category = ").push_bind(category_id);
        }

        if !excluded.is_empty() {
            builder.push(" AND id NOT IN (");
            let mut ids = builder.separated(", ");
            for id in excluded {
                ids.push_bind(*id);
            }
            ids.push_unseparated(")");
        }

        builder.push(" ORDER BY RANDOM() LIMIT 1");

        let row: Option<QuestionRow> = builder
            .build_query_as()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(row.map(Question::from))
    }

    async fn insert(&self, question: &NewQuestion) -> Result<i64, RepositoryError> {
        let result = sqlx::query(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.last_insert_rowid())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(id.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::test_pool;

    async fn repo() -> SqliteQuestionRepository {
        SqliteQuestionRepository::new(test_pool().await)
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("tom"), "%tom%");
        assert_eq!(like_pattern("100%_"), r"%100\%\_%");
    }

    #[tokio::test]
    async fn test_find_all_ordered_by_id() {
        let repo = repo().await;
        let questions = repo.find_all().await.unwrap();

        assert_eq!(questions.len(), 19);
        assert!(questions.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn test_search_matches_substring() {
        let repo = repo().await;

        let questions = repo.search("soccer world cup").await.unwrap();
        let ids: Vec<i64> = questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![10, 11]);

        // 通配符按字面匹配
        assert!(repo.search("%").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_non_ascii_ignores_case() {
        let repo = repo().await;
        let id = repo
            .insert(&NewQuestion {
                question: "Élan vital was coined by whom?".to_string(),
                answer: "Henri Bergson".to_string(),
                category: 1,
                difficulty: 4,
            })
            .await
            .unwrap();

        for term in ["élan", "ÉLAN", "Élan vital"] {
            let ids: Vec<i64> = repo
                .search(term)
                .await
                .unwrap()
                .iter()
                .map(|q| q.id)
                .collect();
            assert_eq!(ids, vec![id], "{}", term);
        }

        // 非 ASCII 搜索词同样按字面匹配 % 和 _
        assert!(repo.search("é%").await.unwrap().is_empty());
        assert!(repo.search("ü").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_random_respects_exclusion() {
        let repo = repo().await;

        let question = repo.find_random(Some(6), &[10]).await.unwrap().unwrap();
        assert_eq!(question.id, 11);

        assert!(repo.find_random(Some(6), &[10, 11]).await.unwrap().is_none());
        assert!(repo.find_random(Some(1000), &[]).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_then_delete() {
        let repo = repo().await;

        let id = repo
            .insert(&NewQuestion {
                question: "What is the chemical symbol for gold?".to_string(),
                answer: "Au".to_string(),
                category: 1,
                difficulty: 2,
            })
            .await
            .unwrap();
        assert!(id > 23);

        let stored = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.answer, "Au");

        repo.delete(id).await.unwrap();
        assert!(repo.find_by_id(id).await.unwrap().is_none());
        assert!(matches!(
            repo.delete(id).await,
            Err(RepositoryError::NotFound(_))
        ));
    }
}
