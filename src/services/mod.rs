//! Services module
//!
//! Este módulo contiene la lógica de negocio del sitio: filtro del catálogo,
//! contador de visitas, autenticación del panel, correo de contacto y enlace
//! de reserva por WhatsApp.

pub mod admin_auth_service;
pub mod catalog_filter;
pub mod email_service;
pub mod view_counter;
pub mod whatsapp_service;

pub use catalog_filter::CatalogFilter;
pub use email_service::{ContactEmail, Mailer, SmtpMailer, UnconfiguredMailer};
pub use view_counter::ViewCounter;
