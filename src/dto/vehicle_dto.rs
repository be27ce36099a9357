use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::vehicle::{new_vehicle_id, PLACEHOLDER_IMAGE};
use crate::models::{Language, PriceRange, TranslationFields, Vehicle, VehicleTranslations};
use crate::utils::errors::{validation_error, AppResult};
use crate::utils::validation::{normalize_list, validate_positive};

/// Mayor precio que admite la columna `vehicles.price NUMERIC(10,2)`
pub const MAX_PRICE: f64 = 99_999_999.99;

// Request del formulario de administración (alta y edición)
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRequest {
    #[serde(default)]
    pub id: Option<String>,

    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Brand is required"))]
    pub brand: String,

    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Type is required"))]
    pub vehicle_type: String,

    #[validate(length(min = 1, message = "Class is required"))]
    pub class: String,

    pub price: f64,

    #[serde(default)]
    #[validate(length(min = 1, message = "At least one city is required"))]
    pub cities: Vec<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "At least one feature is required"))]
    pub features: Vec<String>,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default = "default_available")]
    pub available: bool,

    #[serde(default)]
    pub translations: VehicleTranslations,
}

fn default_available() -> bool {
    true
}

impl VehicleRequest {
    /// Recorta los campos, limpia las listas y valida el formulario
    pub fn normalized(mut self) -> AppResult<Self> {
        self.id = self.id.map(|id| id.trim().to_string()).filter(|id| !id.is_empty());
        self.name = self.name.trim().to_string();
        self.brand = self.brand.trim().to_string();
        self.vehicle_type = self.vehicle_type.trim().to_string();
        self.class = self.class.trim().to_string();
        self.image = self.image.map(|url| url.trim().to_string()).filter(|url| !url.is_empty());
        self.cities = normalize_list(self.cities);
        self.features = normalize_list(self.features);
        self.translations.en = normalize_translation(self.translations.en);

        self.validate()?;
        if !self.price.is_finite() || validate_positive(self.price).is_err() || self.price > MAX_PRICE {
            return Err(validation_error("price", "Valid price is required"));
        }
        Ok(self)
    }

    /// Convierte el formulario en vehículo con la franja de precio recalculada
    pub fn into_vehicle(self, id: Option<String>) -> Vehicle {
        let id = id.or(self.id).unwrap_or_else(new_vehicle_id);
        Vehicle {
            id,
            price_range: PriceRange::from_price(self.price),
            translations: VehicleTranslations {
                fr: TranslationFields {
                    features: self.features.clone(),
                    ..TranslationFields::default()
                },
                en: self.translations.en,
            },
            name: self.name,
            brand: self.brand,
            vehicle_type: self.vehicle_type,
            class: self.class,
            price: self.price,
            cities: self.cities,
            features: self.features,
            image: self.image.unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            available: self.available,
            created_at: None,
        }
    }
}

fn normalize_translation(fields: TranslationFields) -> TranslationFields {
    let clean = |value: Option<String>| value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
    TranslationFields {
        name: clean(fields.name),
        vehicle_type: clean(fields.vehicle_type),
        class: clean(fields.class),
        features: normalize_list(fields.features),
    }
}

// Response de alta/edición
#[derive(Debug, Serialize)]
pub struct VehicleIdResponse {
    pub id: String,
}

// Query de búsqueda del catálogo público
#[derive(Debug, Default, Deserialize)]
pub struct VehicleSearchQuery {
    pub city: Option<String>,
    pub brand: Option<String>,
    #[serde(rename = "type")]
    pub vehicle_type: Option<String>,
    pub price: Option<String>,
    pub class: Option<String>,
    pub q: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LanguageQuery {
    pub lang: Option<Language>,
}

// Resumen del panel de administración
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub page_views: i64,
    pub total_vehicles: usize,
    pub available_vehicles: usize,
    pub recent_vehicles: Vec<Vehicle>,
}
