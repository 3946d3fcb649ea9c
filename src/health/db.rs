use sqlx::{Pool, Postgres};

pub async fn health_check(pool: &Pool<Postgres>) -> Result<(), sqlx::Error> {
    let _ = sqlx::query_scalar::<_, i32>("SELECT 1 as one")
        .fetch_one(pool)
        .await?;
    Ok(())
}
