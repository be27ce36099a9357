//! Contador de visitas con respaldo en memoria
//!
//! La base de datos es la fuente de verdad. Si falla, se usa un contador
//! atómico local al proceso y la respuesta lleva `success: false`.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tracing::{debug, error};

use crate::dto::page_view_dto::PageViewResult;
use crate::models::TOTAL_PAGE_PATH;
use crate::repositories::ViewCountStore;

#[derive(Clone)]
pub struct ViewCounter {
    store: Arc<dyn ViewCountStore>,
    fallback: Arc<AtomicI64>,
}

impl ViewCounter {
    pub fn new(store: Arc<dyn ViewCountStore>) -> Self {
        Self {
            store,
            fallback: Arc::new(AtomicI64::new(0)),
        }
    }

    pub async fn increment(&self) -> PageViewResult {
        match self.store.increment(TOTAL_PAGE_PATH).await {
            Ok(count) => {
                debug!("👁️ Visitas totales: {}", count);
                PageViewResult { success: true, count }
            }
            Err(e) => {
                error!("❌ Error incrementando visitas, usando contador en memoria: {}", e);
                let count = self.fallback.fetch_add(1, Ordering::SeqCst) + 1;
                PageViewResult { success: false, count }
            }
        }
    }

    pub async fn get(&self) -> PageViewResult {
        match self.store.get(TOTAL_PAGE_PATH).await {
            Ok(count) => PageViewResult { success: true, count },
            Err(e) => {
                error!("❌ Error leyendo visitas, usando contador en memoria: {}", e);
                PageViewResult {
                    success: false,
                    count: self.fallback.load(Ordering::SeqCst),
                }
            }
        }
    }
}
