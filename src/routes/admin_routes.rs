use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Json, Router,
};

use crate::controllers::auth_controller::AuthController;
use crate::controllers::dashboard_controller::DashboardController;
use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::api_response::ApiResponse;
use crate::dto::auth_dto::LoginForm;
use crate::dto::vehicle_dto::{DashboardOverview, VehicleIdResponse, VehicleRequest};
use crate::middleware::admin_gate::{DASHBOARD_PATH, LOGIN_PATH};
use crate::models::Vehicle;
use crate::services::admin_auth_service::removal_cookie;
use crate::state::AppState;
use crate::utils::errors::AppError;

const LOGIN_PAGE: &str = r#"<!DOCTYPE html>
<html lang="fr">
<head><meta charset="utf-8"><title>Zouggari Transport - Admin</title></head>
<body>
  <h1>Admin Login</h1>
  <form method="post" action="/admin/login">
    <label>Username <input name="username" autocomplete="username" required></label>
    <label>Password <input name="password" type="password" autocomplete="current-password" required></label>
    <button type="submit">Login</button>
  </form>
</body>
</html>"#;

/// Rutas del panel; todas pasan por el middleware `admin_gate`
pub fn create_admin_router() -> Router<AppState> {
    Router::new()
        .route("/admin", get(|| async { Redirect::temporary(DASHBOARD_PATH) }))
        .route("/admin/login", get(login_page).post(login))
        .route("/admin/logout", axum::routing::post(logout))
        .route("/admin/dashboard", get(dashboard))
        .route("/admin/dashboard/vehicles", get(list_vehicles))
        .route("/admin/api/vehicles", axum::routing::post(add_vehicle))
        .route(
            "/admin/api/vehicles/:id",
            get(get_vehicle).put(update_vehicle).delete(delete_vehicle),
        )
}

async fn login_page() -> Html<&'static str> {
    Html(LOGIN_PAGE)
}

async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Result<Response, AppError> {
    let cookie = AuthController::new(&state.config).login(&form)?;
    Ok((
        [(header::SET_COOKIE, cookie.to_string())],
        Redirect::to(DASHBOARD_PATH),
    )
        .into_response())
}

async fn logout() -> Response {
    (
        [(header::SET_COOKIE, removal_cookie().to_string())],
        Redirect::to(LOGIN_PATH),
    )
        .into_response()
}

async fn dashboard(State(state): State<AppState>) -> Result<Json<ApiResponse<DashboardOverview>>, AppError> {
    let controller = DashboardController::new(state.vehicles.clone(), state.view_counter.clone());
    Ok(Json(ApiResponse::success(controller.overview().await?)))
}

async fn list_vehicles(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<Vehicle>>>, AppError> {
    let controller = VehicleController::new(state.vehicles.clone());
    Ok(Json(ApiResponse::success(controller.list().await?)))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Vehicle>>, AppError> {
    let controller = VehicleController::new(state.vehicles.clone());
    Ok(Json(ApiResponse::success(controller.get(&id).await?)))
}

async fn add_vehicle(
    State(state): State<AppState>,
    Json(request): Json<VehicleRequest>,
) -> Result<Json<ApiResponse<VehicleIdResponse>>, AppError> {
    let controller = VehicleController::new(state.vehicles.clone());
    Ok(Json(controller.add(request).await?))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<VehicleRequest>,
) -> Result<Json<ApiResponse<VehicleIdResponse>>, AppError> {
    let controller = VehicleController::new(state.vehicles.clone());
    Ok(Json(controller.update(&id, request).await?))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = VehicleController::new(state.vehicles.clone());
    Ok(Json(controller.delete(&id).await?))
}
