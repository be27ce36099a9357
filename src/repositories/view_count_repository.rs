//! Repositorio del contador de visitas

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::ViewCount;
use crate::utils::errors::AppResult;

#[async_trait]
pub trait ViewCountStore: Send + Sync {
    /// Incrementa el contador de `page_path` y devuelve el nuevo valor
    async fn increment(&self, page_path: &str) -> AppResult<i64>;

    /// Valor actual, 0 si la fila no existe todavía
    async fn get(&self, page_path: &str) -> AppResult<i64>;
}

pub struct ViewCountRepository {
    pool: PgPool,
}

impl ViewCountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find(&self, page_path: &str) -> AppResult<Option<ViewCount>> {
        let row = sqlx::query_as::<_, ViewCount>(
            "SELECT page_path, view_count, last_viewed FROM viewcounts WHERE page_path = $1",
        )
        .bind(page_path)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}

#[async_trait]
impl ViewCountStore for ViewCountRepository {
    async fn increment(&self, page_path: &str) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO viewcounts (page_path, view_count, last_viewed)
            VALUES ($1, 1, NOW())
            ON CONFLICT (page_path) DO UPDATE
            SET view_count = viewcounts.view_count + 1, last_viewed = NOW()
            RETURNING view_count
            "#,
        )
        .bind(page_path)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    async fn get(&self, page_path: &str) -> AppResult<i64> {
        Ok(self.find(page_path).await?.map(|row| row.view_count).unwrap_or(0))
    }
}
