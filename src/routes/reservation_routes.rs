use axum::{extract::State, routing::post, Extension, Json, Router};

use crate::controllers::reservation_controller::ReservationController;
use crate::dto::reservation_dto::{WhatsAppReservationRequest, WhatsAppReservationResponse};
use crate::models::Language;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_reservation_router() -> Router<AppState> {
    Router::new().route("/reservations/whatsapp", post(whatsapp_reservation))
}

async fn whatsapp_reservation(
    State(state): State<AppState>,
    Extension(language): Extension<Language>,
    Json(request): Json<WhatsAppReservationRequest>,
) -> Result<Json<WhatsAppReservationResponse>, AppError> {
    let controller = ReservationController::new(state.vehicles.clone(), state.config.whatsapp_number.clone());
    Ok(Json(controller.whatsapp_link(request, language).await?))
}
