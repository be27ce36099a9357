mod common;

use axum::body::Body;
use axum::extract::connect_info::MockConnectInfo;
use axum::http::{header, Method, Request, StatusCode};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;

use common::*;
use zouggari_transport::services::UnconfiguredMailer;
use zouggari_transport::{create_app_router, AppState};

fn ids(body: &serde_json::Value) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_str().unwrap().to_string())
        .collect()
}

fn track_request(origin: Option<&str>, host: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/api/track-page-view")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(origin) = origin {
        builder = builder.header(header::ORIGIN, origin);
    }
    if let Some(host) = host {
        builder = builder.header(header::HOST, host);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let response = send(&app.router, get("/health")).await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "zouggari_transport");
}

#[tokio::test]
async fn test_list_vehicles_returns_full_catalog() {
    let app = create_test_app();
    let response = send(&app.router, get("/api/vehicles")).await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(ids(&body), vec!["v1", "v2", "v3", "v4", "v5"]);
    assert_eq!(body[1]["priceRange"], "Moins de 300 DH");
    assert_eq!(body[2]["priceRange"], "Plus de 2000 DH");
    assert_eq!(body[0]["type"], "Berline");
}

#[tokio::test]
async fn test_list_vehicles_degrades_to_empty_on_database_failure() {
    let state = AppState::from_parts(
        test_config(),
        Arc::new(FailingStore),
        Arc::new(FailingStore),
        Arc::new(RecordingMailer::default()),
    );
    let router = create_app_router(state);

    let response = send(&router, get("/api/vehicles")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!([]));
}

#[tokio::test]
async fn test_search_by_brand_preserves_order() {
    let app = create_test_app();
    let response = send(&app.router, get("/api/vehicles/search?brand=Toyota")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(ids(&response.json()), vec!["v1", "v3", "v5"]);
}

#[tokio::test]
async fn test_search_term_matches_french_feature() {
    let app = create_test_app();
    let response = send(&app.router, get("/api/vehicles/search?q=cuir")).await;
    assert_eq!(ids(&response.json()), vec!["v3"]);
}

#[tokio::test]
async fn test_search_combines_filters_and_term() {
    let app = create_test_app();
    let response = send(
        &app.router,
        get("/api/vehicles/search?city=Casablanca&q=gps&brand=Toutes%20les%20marques"),
    )
    .await;
    assert_eq!(ids(&response.json()), vec!["v2", "v3"]);

    let response = send(&app.router, get("/api/vehicles/search?brand=Dacia&q=cuir")).await;
    assert_eq!(response.json(), json!([]));
}

#[tokio::test]
async fn test_search_uses_language_from_query_and_cookie() {
    let app = create_test_app();

    let response = send(&app.router, get("/api/vehicles/search?lang=en&type=Sedan")).await;
    assert_eq!(ids(&response.json()).len(), 5);

    let request = Request::builder()
        .uri("/api/vehicles/search?class=Comfort")
        .header(header::COOKIE, "language=en")
        .body(Body::empty())
        .unwrap();
    assert_eq!(ids(&send(&app.router, request).await.json()).len(), 5);

    let response = send(&app.router, get("/api/vehicles/search?class=Comfort")).await;
    assert_eq!(response.json(), json!([]));
}

#[tokio::test]
async fn test_catalog_options() {
    let app = create_test_app();
    let response = send(&app.router, get("/api/catalog/options?lang=en")).await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["language"], "en");
    assert_eq!(body["cities"][0], "All cities");
    assert_eq!(body["brands"][0], "All brands");
    assert_eq!(body["prices"][1], "Moins de 300 DH");
}

#[tokio::test]
async fn test_track_page_view_requires_matching_origin() {
    let app = create_test_app();

    let response = send(&app.router, track_request(None, Some("zouggari.ma"), json!({"path": "/"}))).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    let body = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid request");

    let response = send(
        &app.router,
        track_request(Some("https://evil.example"), Some("zouggari.ma"), json!({"path": "/"})),
    )
    .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_track_page_view_requires_path() {
    let app = create_test_app();
    let response = send(
        &app.router,
        track_request(Some("https://zouggari.ma"), Some("zouggari.ma"), json!({})),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["message"], "Path is required");
}

#[tokio::test]
async fn test_two_page_views_increment_by_two() {
    let app = create_test_app();
    let before = send(&app.router, get("/api/page-views")).await.json()["count"]
        .as_i64()
        .unwrap();

    for _ in 0..2 {
        let response = send(
            &app.router,
            track_request(Some("https://zouggari.ma"), Some("zouggari.ma"), json!({"path": "/services"})),
        )
        .await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.json()["success"], true);
    }

    let after = send(&app.router, get("/api/page-views")).await.json();
    assert_eq!(after["count"].as_i64().unwrap(), before + 2);
}

#[tokio::test]
async fn test_page_view_fallback_counter() {
    let state = AppState::from_parts(
        test_config(),
        Arc::new(MemoryVehicleStore::default()),
        Arc::new(FailingStore),
        Arc::new(RecordingMailer::default()),
    );
    let router = create_app_router(state);

    let response = send(
        &router,
        track_request(Some("http://localhost:3000"), Some("localhost:3000"), json!({"path": "/"})),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({"success": true, "count": 1}));
}

#[tokio::test]
async fn test_contact_form_sends_email() {
    let app = create_test_app();
    let body = json!({
        "name": "Karim",
        "email": "karim@example.ma",
        "phone": "0661482890",
        "subject": "Location Clio",
        "message": "Bonjour\nDisponible en juillet ?"
    });

    let response = send(&app.router, json_request(Method::POST, "/api/contact", &body)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({"success": true, "message": "Email sent successfully"}));

    let sent = app.mailer.sent.lock().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "Contact Form: Location Clio");
    assert!(sent[0].html_body.contains("Bonjour<br>Disponible en juillet ?"));
}

#[tokio::test]
async fn test_contact_form_rejects_invalid_email() {
    let app = create_test_app();
    let body = json!({
        "name": "Karim",
        "email": "not-an-email",
        "phone": "0661482890",
        "subject": "Location",
        "message": "Bonjour"
    });

    let response = send(&app.router, json_request(Method::POST, "/api/contact", &body)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["success"], false);
    assert!(app.mailer.sent.lock().await.is_empty());
}

#[tokio::test]
async fn test_contact_form_without_smtp_fails() {
    let state = AppState::from_parts(
        test_config(),
        Arc::new(MemoryVehicleStore::default()),
        Arc::new(MemoryViewCountStore::default()),
        Arc::new(UnconfiguredMailer),
    );
    let router = create_app_router(state);
    let body = json!({
        "name": "Karim",
        "email": "karim@example.ma",
        "phone": "0661482890",
        "subject": "Location",
        "message": "Bonjour"
    });

    let response = send(&router, json_request(Method::POST, "/api/contact", &body)).await;
    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.json()["message"], "Failed to send email");
}

#[tokio::test]
async fn test_contact_form_is_rate_limited() {
    let app = create_test_app();
    let body = json!({
        "name": "Karim",
        "email": "karim@example.ma",
        "phone": "0661482890",
        "subject": "Location",
        "message": "Bonjour"
    });

    for _ in 0..3 {
        let response = send(&app.router, json_request(Method::POST, "/api/contact", &body)).await;
        assert_eq!(response.status, StatusCode::OK);
    }
    let response = send(&app.router, json_request(Method::POST, "/api/contact", &body)).await;
    assert_eq!(response.status, StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_contact_rate_limit_is_per_peer_address() {
    let app = create_test_app();
    let body = json!({
        "name": "Karim",
        "email": "karim@example.ma",
        "phone": "0661482890",
        "subject": "Location",
        "message": "Bonjour"
    });
    let first = app
        .router
        .clone()
        .layer(MockConnectInfo(SocketAddr::from(([10, 0, 0, 1], 5000))));
    let second = app
        .router
        .clone()
        .layer(MockConnectInfo(SocketAddr::from(([10, 0, 0, 2], 5000))));

    for _ in 0..3 {
        let response = send(&first, json_request(Method::POST, "/api/contact", &body)).await;
        assert_eq!(response.status, StatusCode::OK);
    }
    let response = send(&first, json_request(Method::POST, "/api/contact", &body)).await;
    assert_eq!(response.status, StatusCode::TOO_MANY_REQUESTS);

    let response = send(&second, json_request(Method::POST, "/api/contact", &body)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(app.mailer.sent.lock().await.len(), 4);
}

#[tokio::test]
async fn test_whatsapp_reservation_link() {
    let app = create_test_app();
    let body = json!({
        "vehicleId": "v1",
        "name": "Karim",
        "phone": "0661482890",
        "startDate": "2025-07-01",
        "endDate": "2025-07-05"
    });

    let response = send(&app.router, json_request(Method::POST, "/api/reservations/whatsapp", &body)).await;
    assert_eq!(response.status, StatusCode::OK);

    let body = response.json();
    assert_eq!(
        body["message"],
        "Bonjour, je souhaite réserver le véhicule Corolla (Toyota).\n\nNom: Karim\nTéléphone: 0661482890\nDate de début: 2025-07-01\nDate de fin: 2025-07-05\n\nMerci."
    );
    let url = body["url"].as_str().unwrap();
    assert!(url.starts_with("https://wa.me/212661482890?text=Bonjour%2C%20je%20souhaite"));
}

#[tokio::test]
async fn test_whatsapp_reservation_validation() {
    let app = create_test_app();

    let missing = json!({"vehicleId": "v1", "name": "Karim", "phone": "", "startDate": "2025-07-01", "endDate": "2025-07-05"});
    let response = send(&app.router, json_request(Method::POST, "/api/reservations/whatsapp", &missing)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["message"], "Veuillez remplir tous les champs");

    let reversed = json!({"vehicleId": "v1", "name": "Karim", "phone": "0661482890", "startDate": "2025-07-05", "endDate": "2025-07-01"});
    let response = send(&app.router, json_request(Method::POST, "/api/reservations/whatsapp", &reversed)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let unknown = json!({"vehicleId": "v404", "name": "Karim", "phone": "0661482890", "startDate": "2025-07-01", "endDate": "2025-07-05"});
    let response = send(&app.router, json_request(Method::POST, "/api/reservations/whatsapp", &unknown)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let unavailable = json!({"vehicleId": "v4", "name": "Karim", "phone": "0661482890", "startDate": "2025-07-01", "endDate": "2025-07-05"});
    let response = send(&app.router, json_request(Method::POST, "/api/reservations/whatsapp", &unavailable)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_language_preference_cookie() {
    let app = create_test_app();

    let response = send(&app.router, json_request(Method::POST, "/api/language", &json!({"language": "en"}))).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["data"], "en");
    let cookie = response.set_cookie().unwrap();
    assert!(cookie.starts_with("language=en"));
    assert!(cookie.contains("Max-Age=31536000"));

    let response = send(&app.router, json_request(Method::POST, "/api/language", &json!({"language": "de"}))).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
