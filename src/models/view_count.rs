//! Contador de visitas

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Clave de la fila que acumula todas las visitas del sitio
pub const TOTAL_PAGE_PATH: &str = "total";

/// Fila de la tabla viewcounts
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ViewCount {
    pub page_path: String,
    pub view_count: i64,
    pub last_viewed: DateTime<Utc>,
}
