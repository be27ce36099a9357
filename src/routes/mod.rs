//! Routers de la API
//!
//! `create_app_router` compone todas las rutas con sus capas comunes.

pub mod admin_routes;
pub mod contact_routes;
pub mod language_routes;
pub mod page_view_routes;
pub mod reservation_routes;
pub mod vehicle_routes;

use axum::{middleware::from_fn, response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::middleware::{admin_gate, cors_layer, language_middleware};
use crate::state::AppState;

pub fn create_app_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(vehicle_routes::create_vehicle_router())
        .merge(page_view_routes::create_page_view_router())
        .merge(contact_routes::create_contact_router(state.rate_limit.clone()))
        .merge(reservation_routes::create_reservation_router())
        .merge(language_routes::create_language_router());

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .merge(admin_routes::create_admin_router())
        .layer(from_fn(language_middleware))
        .layer(from_fn(admin_gate))
        .layer(cors_layer(&state.config.cors_origins))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "zouggari_transport",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
