//! Protección de las rutas `/admin`
//!
//! Sin la cookie de sesión, cualquier ruta del panel salvo el login redirige a
//! `/admin/login`; con sesión, el login redirige al dashboard.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

use crate::services::admin_auth_service::is_authenticated;

pub const LOGIN_PATH: &str = "/admin/login";
pub const DASHBOARD_PATH: &str = "/admin/dashboard";

fn is_admin_path(path: &str) -> bool {
    path == "/admin" || path.starts_with("/admin/")
}

fn is_login_path(path: &str) -> bool {
    path == LOGIN_PATH || path.starts_with("/admin/login/")
}

pub async fn admin_gate(request: Request, next: Next) -> Response {
    let path = request.uri().path();

    if is_admin_path(path) {
        let authenticated = is_authenticated(request.headers());

        if !authenticated && !is_login_path(path) {
            debug!("🔒 Acceso sin sesión a {}, redirigiendo al login", path);
            return Redirect::temporary(LOGIN_PATH).into_response();
        }
        if authenticated && path == LOGIN_PATH {
            return Redirect::temporary(DASHBOARD_PATH).into_response();
        }
    }

    next.run(request).await
}
