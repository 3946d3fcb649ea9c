use sqlx::{Pool, Postgres};
use tracing::{debug, info};

use crate::question::models::{NewQuestion, Question};

pub async fn count_questions(pool: &Pool<Postgres>) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM "questions""#)
        .fetch_one(pool)
        .await
}

pub async fn get_question_page(
    pool: &Pool<Postgres>,
    page_num: u32,
    page_size: u16,
) -> Result<Vec<Question>, sqlx::Error> {
    let limit = i64::from(page_size);
    let offset = i64::from(page_num - 1) * limit;
    debug!("Fetching question page {} (limit {}, offset {})", page_num, limit, offset);

    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM "questions"
        ORDER BY id
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

pub async fn get_all_questions(pool: &Pool<Postgres>) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM "questions"
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_questions_by_category(
    pool: &Pool<Postgres>,
    category_id: i32,
) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM "questions"
        WHERE category = $1
        ORDER BY id
        "#,
    )
    .bind(category_id)
    .fetch_all(pool)
    .await
}

pub async fn search_questions(
    pool: &Pool<Postgres>,
    search_term: &str,
) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM "questions"
        WHERE question ILIKE '%' || $1 || '%'
        ORDER BY id
        "#,
    )
    .bind(search_term)
    .fetch_all(pool)
    .await
}

pub async fn create_question(
    pool: &Pool<Postgres>,
    question: &NewQuestion,
) -> Result<i32, sqlx::Error> {
    let id = sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO "questions" (question, answer, category, difficulty)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(&question.question)
    .bind(&question.answer)
    .bind(question.category)
    .bind(question.difficulty)
    .fetch_one(pool)
    .await?;

    info!("Created question {} in category {}", id, question.category);
    Ok(id)
}

/// Returns false when no question had the given id
pub async fn delete_question(pool: &Pool<Postgres>, question_id: i32) -> Result<bool, sqlx::Error> {
    let row = sqlx::query(
        r#"
        DELETE FROM "questions"
        WHERE id = $1
        "#,
    )
    .bind(question_id)
    .execute(pool)
    .await?;

    Ok(row.rows_affected() > 0)
}
