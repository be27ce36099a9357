//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos del catálogo y su mapeo
//! al schema PostgreSQL.

pub mod catalog;
pub mod language;
pub mod vehicle;
pub mod view_count;

pub use catalog::{CatalogOptions, FilterField};
pub use language::Language;
pub use vehicle::{PriceRange, TranslationFields, Vehicle, VehicleRow, VehicleTranslations};
pub use view_count::{ViewCount, TOTAL_PAGE_PATH};
