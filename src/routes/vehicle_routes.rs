use axum::{
    extract::{Query, State},
    routing::get,
    Extension, Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::VehicleSearchQuery;
use crate::models::{CatalogOptions, Language, Vehicle};
use crate::services::CatalogFilter;
use crate::state::AppState;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/vehicles", get(list_vehicles))
        .route("/vehicles/search", get(search_vehicles))
        .route("/catalog/options", get(catalog_options))
}

async fn list_vehicles(State(state): State<AppState>) -> Json<Vec<Vehicle>> {
    let controller = VehicleController::new(state.vehicles.clone());
    Json(controller.list_public().await)
}

async fn search_vehicles(
    State(state): State<AppState>,
    Extension(language): Extension<Language>,
    Query(query): Query<VehicleSearchQuery>,
) -> Json<Vec<Vehicle>> {
    let controller = VehicleController::new(state.vehicles.clone());
    let filter = CatalogFilter::from_query(query, language);
    Json(controller.search(&filter).await)
}

async fn catalog_options(Extension(language): Extension<Language>) -> Json<CatalogOptions> {
    Json(CatalogOptions::for_language(language))
}
