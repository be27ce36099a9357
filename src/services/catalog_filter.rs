//! Filtro y búsqueda del catálogo
//!
//! Un vehículo pasa cuando todos los filtros activos coinciden exactamente y,
//! si hay término de búsqueda, cuando el nombre, la marca, el tipo o alguna
//! característica (en el idioma activo) lo contienen sin distinguir
//! mayúsculas. Filtros y búsqueda se combinan con AND y se conserva el orden.

use crate::dto::vehicle_dto::VehicleSearchQuery;
use crate::models::{FilterField, Language, Vehicle};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogFilter {
    pub language: Language,
    pub city: Option<String>,
    pub brand: Option<String>,
    pub vehicle_type: Option<String>,
    pub price: Option<String>,
    pub class: Option<String>,
    pub search: Option<String>,
}

impl CatalogFilter {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    pub fn from_query(query: VehicleSearchQuery, language: Language) -> Self {
        Self {
            language,
            city: query.city,
            brand: query.brand,
            vehicle_type: query.vehicle_type,
            price: query.price,
            class: query.class,
            search: query.q,
        }
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn vehicle_type(mut self, vehicle_type: impl Into<String>) -> Self {
        self.vehicle_type = Some(vehicle_type.into());
        self
    }

    pub fn price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Valor del filtro si está activo; vacío o el centinela "todos" lo desactivan
    fn active<'a>(&self, field: FilterField, value: &'a Option<String>) -> Option<&'a str> {
        value
            .as_deref()
            .filter(|v| !v.is_empty() && *v != field.all_label(self.language))
    }

    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        let view = vehicle.localized(self.language);

        if let Some(city) = self.active(FilterField::City, &self.city) {
            if !vehicle.cities.iter().any(|c| c == city) {
                return false;
            }
        }
        if let Some(brand) = self.active(FilterField::Brand, &self.brand) {
            if vehicle.brand != brand {
                return false;
            }
        }
        if let Some(vehicle_type) = self.active(FilterField::Type, &self.vehicle_type) {
            if view.vehicle_type != vehicle_type {
                return false;
            }
        }
        if let Some(price) = self.active(FilterField::Price, &self.price) {
            if vehicle.price_range.label() != price {
                return false;
            }
        }
        if let Some(class) = self.active(FilterField::Class, &self.class) {
            if view.class != class {
                return false;
            }
        }

        let Some(term) = self.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) else {
            return true;
        };
        let term = term.to_lowercase();
        let contains = |value: &str| value.to_lowercase().contains(&term);

        contains(view.name)
            || contains(view.brand)
            || contains(view.vehicle_type)
            || view.features.iter().any(|feature| contains(feature.as_str()))
    }

    /// Subsecuencia de `vehicles` que cumple el filtro, en el orden original
    pub fn apply(&self, vehicles: Vec<Vehicle>) -> Vec<Vehicle> {
        vehicles.into_iter().filter(|vehicle| self.matches(vehicle)).collect()
    }
}
