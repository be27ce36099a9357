use axum::{extract::State, middleware::from_fn_with_state, routing::post, Json, Router};

use crate::controllers::contact_controller::ContactController;
use crate::dto::api_response::ApiResponse;
use crate::dto::contact_dto::ContactRequest;
use crate::middleware::rate_limit::{rate_limit_middleware, RateLimitState};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_contact_router(rate_limit: RateLimitState) -> Router<AppState> {
    Router::new()
        .route("/contact", post(send_contact))
        .route_layer(from_fn_with_state(rate_limit, rate_limit_middleware))
}

async fn send_contact(
    State(state): State<AppState>,
    Json(request): Json<ContactRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = ContactController::new(state.mailer.clone());
    Ok(Json(controller.send(request).await?))
}
