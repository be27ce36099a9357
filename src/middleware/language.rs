//! Resolución del idioma de la petición
//!
//! Orden: parámetro `lang` de la query, cookie `language`, francés por defecto.
//! El idioma se inyecta como `Extension<Language>`.

use axum::{
    extract::{Query, Request},
    middleware::Next,
    response::Response,
};

use crate::dto::vehicle_dto::LanguageQuery;
use crate::models::Language;
use crate::services::admin_auth_service::request_cookie;

pub const LANGUAGE_COOKIE: &str = "language";

pub fn resolve_language(request: &Request) -> Language {
    Query::<LanguageQuery>::try_from_uri(request.uri())
        .ok()
        .and_then(|Query(query)| query.lang)
        .or_else(|| {
            request_cookie(request.headers(), LANGUAGE_COOKIE).and_then(|value| value.parse().ok())
        })
        .unwrap_or_default()
}

pub async fn language_middleware(mut request: Request, next: Next) -> Response {
    let language = resolve_language(&request);
    request.extensions_mut().insert(language);
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header;

    #[test]
    fn test_query_wins_over_cookie() {
        let request = Request::builder()
            .uri("/api/vehicles/search?lang=en&brand=Kia")
            .header(header::COOKIE, "language=fr")
            .body(Body::empty())
            .unwrap();
        assert_eq!(resolve_language(&request), Language::En);
    }

    #[test]
    fn test_cookie_then_default() {
        let request = Request::builder()
            .uri("/api/vehicles/search")
            .header(header::COOKIE, "language=en")
            .body(Body::empty())
            .unwrap();
        assert_eq!(resolve_language(&request), Language::En);

        let request = Request::builder().uri("/?lang=de").body(Body::empty()).unwrap();
        assert_eq!(resolve_language(&request), Language::Fr);
    }
}
