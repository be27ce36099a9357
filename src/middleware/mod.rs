//! Middleware del sistema
//!
//! Este módulo contiene el middleware de protección del panel, idioma,
//! CORS y rate limiting.

pub mod admin_gate;
pub mod cors;
pub mod language;
pub mod rate_limit;

pub use admin_gate::admin_gate;
pub use cors::*;
pub use language::language_middleware;
pub use rate_limit::*;
