//! Zouggari Transport
//!
//! Backend del sitio de alquiler de vehículos: catálogo con filtros, panel de
//! administración protegido por cookie, contador de visitas, formulario de
//! contacto por SMTP y reservas por WhatsApp.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::create_app_router;
pub use state::AppState;
