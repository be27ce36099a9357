use axum::{
    extract::State,
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::page_view_controller::PageViewController;
use crate::dto::page_view_dto::{PageViewResult, TrackPageViewRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_page_view_router() -> Router<AppState> {
    Router::new()
        .route("/track-page-view", post(track_page_view))
        .route("/page-views", get(page_views))
}

// El cuerpo se lee como opcional para que la comprobación de origen vaya primero
async fn track_page_view(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Option<Json<TrackPageViewRequest>>,
) -> Result<Json<PageViewResult>, AppError> {
    let request = payload.map(|Json(request)| request).unwrap_or_default();
    let controller = PageViewController::new(state.view_counter.clone());
    Ok(Json(controller.track(&headers, request).await?))
}

async fn page_views(State(state): State<AppState>) -> Json<PageViewResult> {
    Json(state.view_counter.get().await)
}
