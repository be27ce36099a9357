use axum::http::{header, HeaderMap};
use tracing::warn;

use crate::dto::page_view_dto::{PageViewResult, TrackPageViewRequest};
use crate::services::ViewCounter;
use crate::utils::errors::{bad_request_error, AppError, AppResult};

pub struct PageViewController {
    counter: ViewCounter,
}

/// Sólo se cuentan peticiones del propio sitio: `Origin` debe contener `Host`
pub fn is_same_origin(headers: &HeaderMap) -> bool {
    let origin = headers.get(header::ORIGIN).and_then(|v| v.to_str().ok());
    let host = headers.get(header::HOST).and_then(|v| v.to_str().ok());
    match (origin, host) {
        (Some(origin), Some(host)) if !host.is_empty() => origin.contains(host),
        _ => false,
    }
}

impl PageViewController {
    pub fn new(counter: ViewCounter) -> Self {
        Self { counter }
    }

    pub async fn track(&self, headers: &HeaderMap, request: TrackPageViewRequest) -> AppResult<PageViewResult> {
        if !is_same_origin(headers) {
            warn!("🚫 Visita rechazada: Origin/Host no coinciden");
            return Err(AppError::Forbidden("Invalid request".to_string()));
        }

        if request.path.as_deref().map_or(true, |path| path.trim().is_empty()) {
            return Err(bad_request_error("Path is required"));
        }

        // El fallo del contador queda sólo en el log
        let result = self.counter.increment().await;
        Ok(PageViewResult {
            success: true,
            count: result.count,
        })
    }
}
