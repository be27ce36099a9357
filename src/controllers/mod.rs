//! Controladores: validación y orquestación de cada funcionalidad

pub mod auth_controller;
pub mod contact_controller;
pub mod dashboard_controller;
pub mod page_view_controller;
pub mod reservation_controller;
pub mod vehicle_controller;
