use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};

use crate::controllers::auth_controller::AuthController;
use crate::dto::api_response::ApiResponse;
use crate::dto::auth_dto::LanguagePreferenceRequest;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_language_router() -> Router<AppState> {
    Router::new().route("/language", post(set_language))
}

async fn set_language(
    State(state): State<AppState>,
    Json(request): Json<LanguagePreferenceRequest>,
) -> Result<Response, AppError> {
    let (language, cookie) = AuthController::new(&state.config).language_preference(&request)?;
    Ok((
        [(header::SET_COOKIE, cookie.to_string())],
        Json(ApiResponse::success_with_message(language, "Language updated")),
    )
        .into_response())
}
