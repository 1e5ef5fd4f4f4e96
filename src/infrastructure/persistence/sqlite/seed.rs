//! Sample Data - 示例题库
//!
//! 空库启动时写入默认分类和题目，已有数据时不做任何修改

use super::DbPool;

/// 默认分类 (id, type)
const SAMPLE_CATEGORIES: &[(i64, &str)] = &[
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

/// 默认题目 (id, question, answer, category, difficulty)
const SAMPLE_QUESTIONS: &[(i64, &str, &str, i64, i64)] = &[
    (
        2,
        "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?",
        "Apollo 13",
        5,
        4,
    ),
    (
        4,
        "What actor did author Anne Rice first denounce, then praise in the role of her \
         beloved Lestat?",
        "Tom Cruise",
        5,
        4,
    ),
    (5, "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
    (
        6,
        "What was the title of the 1990 fantasy directed by Tim Burton about a young man with \
         multi-bladed appendages?",
        "Edward Scissorhands",
        5,
        3,
    ),
    (9, "What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
    (10, "Which is the only team to play in every soccer World Cup tournament?", "Brazil", 6, 3),
    (11, "Which country won the first ever soccer World Cup in 1930?", "Uruguay", 6, 4),
    (12, "Who invented Peanut Butter?", "George Washington Carver", 4, 2),
    (13, "What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    (
        14,
        "In which royal palace would you find the Hall of Mirrors?",
        "The Palace of Versailles",
        3,
        3,
    ),
    (15, "The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
    (
        16,
        "Which Dutch graphic artist, initials M C, was a creator of optical illusions?",
        "Escher",
        2,
        1,
    ),
    (17, "La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    (18, "How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
    (
        19,
        "Which American artist was a pioneer of Abstract Expressionism, and a leading exponent \
         of action painting?",
        "Jackson Pollock",
        2,
        2,
    ),
    (20, "What is the heaviest organ in the human body?", "The Liver", 1, 4),
    (21, "Who discovered penicillin?", "Alexander Fleming", 1, 3),
    (22, "Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
    (23, "Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, 4),
];

/// 写入示例数据
///
/// 分类表和题目表分别判断，只有为空时才写入。
/// 返回实际写入的 (分类数, 题目数)。
pub async fn seed_sample_data(pool: &DbPool) -> Result<(usize, usize), sqlx::Error> {
    let mut tx = pool.begin().await?;

    let (category_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
        .fetch_one(&mut *tx)
        .await?;
    let mut categories_seeded = 0;
    if category_count == 0 {
        for (id, kind) in SAMPLE_CATEGORIES {
            sqlx::query("INSERT INTO categories (id, type) VALUES (?, ?)")
                .bind(*id)
                .bind(*kind)
                .execute(&mut *tx)
                .await?;
        }
        categories_seeded = SAMPLE_CATEGORIES.len();
    }

    let (question_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
        .fetch_one(&mut *tx)
        .await?;
    let mut questions_seeded = 0;
    if question_count == 0 {
        for (id, question, answer, category, difficulty) in SAMPLE_QUESTIONS {
            sqlx::query(
                "INSERT INTO questions (id, question, answer, category, difficulty) \
                 VALUES (?, ?, ?, ?, ?)",
            )
            .bind(*id)
            .bind(*question)
            .bind(*answer)
            .bind(*category)
            .bind(*difficulty)
            .execute(&mut *tx)
            .await?;
        }
        questions_seeded = SAMPLE_QUESTIONS.len();
    }

    tx.commit().await?;

    if categories_seeded > 0 || questions_seeded > 0 {
        tracing::info!(
            categories = categories_seeded,
            questions = questions_seeded,
            "Sample data seeded"
        );
    }

    Ok((categories_seeded, questions_seeded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::empty_test_pool;

    #[tokio::test]
    async fn test_seed_empty_store() {
        let pool = empty_test_pool().await;
        let seeded = seed_sample_data(&pool).await.unwrap();
        assert_eq!(seeded, (6, 19));
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let pool = empty_test_pool().await;
        seed_sample_data(&pool).await.unwrap();
        let seeded = seed_sample_data(&pool).await.unwrap();
        assert_eq!(seeded, (0, 0));

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 19);
    }
}
