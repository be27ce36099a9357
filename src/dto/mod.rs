//! Objetos de transferencia de la API

pub mod api_response;
pub mod auth_dto;
pub mod contact_dto;
pub mod page_view_dto;
pub mod reservation_dto;
pub mod vehicle_dto;

pub use api_response::ApiResponse;
