use sqlx::{Pool, Postgres};

use crate::{question, question::models::Question, quiz::models::CategoryScope};

pub async fn get_quiz_candidates(
    pool: &Pool<Postgres>,
    scope: CategoryScope,
) -> Result<Vec<Question>, sqlx::Error> {
    match scope {
        CategoryScope::All => question::db::get_all_questions(pool).await,
        CategoryScope::Only(category_id) => {
            question::db::get_questions_by_category(pool, category_id).await
        }
    }
}
