//! Autenticación del panel de administración
//!
//! Las credenciales vienen del entorno; la sesión es una cookie
//! `admin_authenticated=true` válida 24 horas.

use axum::http::{header, HeaderMap};
use cookie::{time::Duration, Cookie, SameSite};

use crate::config::AdminCredentials;
use crate::utils::errors::{AppError, AppResult};

pub const ADMIN_COOKIE: &str = "admin_authenticated";
pub const ADMIN_COOKIE_VALUE: &str = "true";
pub const ADMIN_SESSION_SECONDS: i64 = 60 * 60 * 24;

/// Compara usuario y contraseña con los valores configurados
pub fn verify_credentials(credentials: &AdminCredentials, username: &str, password: &str) -> AppResult<()> {
    let (Some(expected_user), Some(expected_pass)) = (&credentials.username, &credentials.password) else {
        return Err(AppError::Configuration("Server configuration error".to_string()));
    };

    if username == expected_user && password == expected_pass {
        Ok(())
    } else {
        Err(AppError::Unauthorized("Invalid username or password".to_string()))
    }
}

/// Cookie de sesión emitida tras un login correcto
pub fn session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((ADMIN_COOKIE, ADMIN_COOKIE_VALUE))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(Duration::seconds(ADMIN_SESSION_SECONDS))
        .build()
}

/// Cookie que borra la sesión en el navegador
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build((ADMIN_COOKIE, ""))
        .http_only(true)
        .path("/")
        .max_age(Duration::ZERO)
        .build()
}

/// Busca una cookie por nombre en las cabeceras `Cookie` de la petición
pub fn request_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_string())
}

pub fn is_authenticated(headers: &HeaderMap) -> bool {
    request_cookie(headers, ADMIN_COOKIE).as_deref() == Some(ADMIN_COOKIE_VALUE)
}
