use std::sync::Arc;

use sqlx::{Pool, Postgres};

use crate::server::error::ServerError;

pub struct AppState {
    pool: Pool<Postgres>,
    page_size: u16,
}

impl AppState {
    pub async fn from_connection_string(
        connection_string: &str,
        page_size: u16,
    ) -> Result<Arc<Self>, ServerError> {
        let pool = Pool::<Postgres>::connect(connection_string).await?;
        Ok(Self::from_pool(pool, page_size))
    }

    pub fn from_pool(pool: Pool<Postgres>, page_size: u16) -> Arc<Self> {
        Arc::new(Self { pool, page_size })
    }

    pub fn get_pool(&self) -> &Pool<Postgres> {
        &self.pool
    }

    pub fn get_page_size(&self) -> u16 {
        self.page_size
    }
}
