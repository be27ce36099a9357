//! Utilidades compartidas por los tests de integración: almacenes en memoria,
//! un mailer que registra los envíos y helpers de petición.
#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower::ServiceExt;

use zouggari_transport::config::{AdminCredentials, EnvironmentConfig};
use zouggari_transport::models::{PriceRange, TranslationFields, Vehicle, VehicleTranslations};
use zouggari_transport::repositories::{VehicleStore, ViewCountStore};
use zouggari_transport::services::{ContactEmail, Mailer};
use zouggari_transport::utils::errors::{internal_error, AppError, AppResult};
use zouggari_transport::{create_app_router, AppState};

pub const ADMIN_COOKIE: &str = "admin_authenticated=true";

#[derive(Default)]
pub struct MemoryVehicleStore {
    vehicles: Mutex<Vec<Vehicle>>,
}

impl MemoryVehicleStore {
    pub fn with(vehicles: Vec<Vehicle>) -> Self {
        Self {
            vehicles: Mutex::new(vehicles),
        }
    }

    pub async fn snapshot(&self) -> Vec<Vehicle> {
        self.vehicles.lock().await.clone()
    }
}

#[async_trait]
impl VehicleStore for MemoryVehicleStore {
    async fn list(&self) -> AppResult<Vec<Vehicle>> {
        Ok(self.vehicles.lock().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Vehicle>> {
        Ok(self.vehicles.lock().await.iter().find(|v| v.id == id).cloned())
    }

    async fn insert(&self, vehicle: &Vehicle) -> AppResult<()> {
        let mut vehicles = self.vehicles.lock().await;
        if vehicles.iter().any(|v| v.id == vehicle.id) {
            return Err(internal_error("duplicate key value violates unique constraint"));
        }
        let mut stored = vehicle.clone();
        stored.created_at = Some(Utc::now());
        vehicles.insert(0, stored);
        Ok(())
    }

    async fn update(&self, vehicle: &Vehicle) -> AppResult<bool> {
        let mut vehicles = self.vehicles.lock().await;
        match vehicles.iter_mut().find(|v| v.id == vehicle.id) {
            Some(existing) => {
                let created_at = existing.created_at;
                *existing = vehicle.clone();
                existing.created_at = created_at;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let mut vehicles = self.vehicles.lock().await;
        let before = vehicles.len();
        vehicles.retain(|v| v.id != id);
        Ok(vehicles.len() < before)
    }
}

/// Almacén que simula una base de datos caída
pub struct FailingStore;

fn connection_refused() -> AppError {
    AppError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl VehicleStore for FailingStore {
    async fn list(&self) -> AppResult<Vec<Vehicle>> {
        Err(connection_refused())
    }

    async fn find_by_id(&self, _id: &str) -> AppResult<Option<Vehicle>> {
        Err(connection_refused())
    }

    async fn insert(&self, _vehicle: &Vehicle) -> AppResult<()> {
        Err(connection_refused())
    }

    async fn update(&self, _vehicle: &Vehicle) -> AppResult<bool> {
        Err(connection_refused())
    }

    async fn delete(&self, _id: &str) -> AppResult<bool> {
        Err(connection_refused())
    }
}

#[async_trait]
impl ViewCountStore for FailingStore {
    async fn increment(&self, _page_path: &str) -> AppResult<i64> {
        Err(connection_refused())
    }

    async fn get(&self, _page_path: &str) -> AppResult<i64> {
        Err(connection_refused())
    }
}

#[derive(Default)]
pub struct MemoryViewCountStore {
    counts: Mutex<HashMap<String, i64>>,
}

#[async_trait]
impl ViewCountStore for MemoryViewCountStore {
    async fn increment(&self, page_path: &str) -> AppResult<i64> {
        let mut counts = self.counts.lock().await;
        let count = counts.entry(page_path.to_string()).or_insert(0);
        *count += 1;
        Ok(*count)
    }

    async fn get(&self, page_path: &str) -> AppResult<i64> {
        Ok(self.counts.lock().await.get(page_path).copied().unwrap_or(0))
    }
}

#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<ContactEmail>>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &ContactEmail) -> AppResult<()> {
        self.sent.lock().await.push(email.clone());
        Ok(())
    }
}

pub fn test_config() -> EnvironmentConfig {
    EnvironmentConfig {
        admin: AdminCredentials {
            username: Some("admin".to_string()),
            password: Some("s3cret".to_string()),
        },
        rate_limit_requests: 3,
        ..EnvironmentConfig::default()
    }
}

pub fn vehicle(id: &str, name: &str, brand: &str, price: f64, cities: &[&str], features: &[&str]) -> Vehicle {
    Vehicle {
        id: id.to_string(),
        name: name.to_string(),
        brand: brand.to_string(),
        vehicle_type: "Berline".to_string(),
        class: "Confort".to_string(),
        price,
        price_range: PriceRange::from_price(price),
        cities: cities.iter().map(|c| c.to_string()).collect(),
        features: features.iter().map(|f| f.to_string()).collect(),
        image: "https://via.placeholder.com/400x300?text=No+Image".to_string(),
        available: true,
        translations: VehicleTranslations {
            fr: TranslationFields {
                features: features.iter().map(|f| f.to_string()).collect(),
                ..TranslationFields::default()
            },
            en: TranslationFields {
                vehicle_type: Some("Sedan".to_string()),
                class: Some("Comfort".to_string()),
                ..TranslationFields::default()
            },
        },
        created_at: None,
    }
}

/// Cinco vehículos, del más reciente al más antiguo
pub fn fleet() -> Vec<Vehicle> {
    let mut vehicles = vec![
        vehicle("v1", "Corolla", "Toyota", 450.0, &["Rabat"], &["Climatisation"]),
        vehicle("v2", "Logan", "Dacia", 250.0, &["Casablanca"], &["GPS"]),
        vehicle("v3", "Land Cruiser", "Toyota", 2500.0, &["Casablanca", "Rabat"], &["Sièges en cuir", "GPS"]),
        vehicle("v4", "Clio", "Renault", 300.0, &["Agadir"], &["Bluetooth"]),
        vehicle("v5", "Yaris", "Toyota", 350.0, &["Marrakech"], &["GPS"]),
    ];
    vehicles[3].available = false;
    let now = Utc::now();
    for (i, v) in vehicles.iter_mut().enumerate() {
        v.created_at = Some(now - Duration::minutes(i as i64));
    }
    vehicles
}

pub struct TestApp {
    pub router: Router,
    pub vehicles: Arc<MemoryVehicleStore>,
    pub mailer: Arc<RecordingMailer>,
}

pub fn create_test_app() -> TestApp {
    create_test_app_with(test_config(), fleet())
}

pub fn create_test_app_with(config: EnvironmentConfig, vehicles: Vec<Vehicle>) -> TestApp {
    let store = Arc::new(MemoryVehicleStore::with(vehicles));
    let mailer = Arc::new(RecordingMailer::default());
    let state = AppState::from_parts(
        config,
        store.clone(),
        Arc::new(MemoryViewCountStore::default()),
        mailer.clone(),
    );
    TestApp {
        router: create_app_router(state),
        vehicles: store,
        mailer,
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }

    pub fn location(&self) -> Option<&str> {
        self.headers.get(header::LOCATION).and_then(|v| v.to_str().ok())
    }

    pub fn set_cookie(&self) -> Option<&str> {
        self.headers.get(header::SET_COOKIE).and_then(|v| v.to_str().ok())
    }
}

pub async fn send(router: &Router, request: Request<Body>) -> TestResponse {
    let response = router.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body")
        .to_vec();
    TestResponse { status, headers, body }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn admin_get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::COOKIE, ADMIN_COOKIE)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn admin_json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    let mut request = json_request(method, uri, body);
    request
        .headers_mut()
        .insert(header::COOKIE, ADMIN_COOKIE.parse().unwrap());
    request
}
