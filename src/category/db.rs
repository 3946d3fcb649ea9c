use sqlx::{Pool, Postgres};

use crate::category::models::Category;

pub async fn get_all_categories(pool: &Pool<Postgres>) -> Result<Vec<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, "type"
        FROM "categories"
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_category_by_id(
    pool: &Pool<Postgres>,
    category_id: i32,
) -> Result<Option<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, "type"
        FROM "categories"
        WHERE id = $1
        "#,
    )
    .bind(category_id)
    .fetch_optional(pool)
    .await
}
