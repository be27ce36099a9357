//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle expuesto por la API, la franja de
//! precio derivada y la fila de la tabla `vehicles`.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sqlx::FromRow;
use uuid::Uuid;

use super::language::Language;

/// Imagen mostrada cuando un vehículo no tiene foto
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x300?text=No+Image";

/// Franja de precio por día, derivada siempre del precio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceRange {
    Under300,
    From300To500,
    From500To800,
    From800To1200,
    From1200To2000,
    Over2000,
}

impl PriceRange {
    pub const ALL: [PriceRange; 6] = [
        PriceRange::Under300,
        PriceRange::From300To500,
        PriceRange::From500To800,
        PriceRange::From800To1200,
        PriceRange::From1200To2000,
        PriceRange::Over2000,
    ];

    /// Calcula la franja a partir del precio (límite inferior incluido)
    pub fn from_price(price: f64) -> Self {
        if price < 300.0 {
            PriceRange::Under300
        } else if price < 500.0 {
            PriceRange::From300To500
        } else if price < 800.0 {
            PriceRange::From500To800
        } else if price < 1200.0 {
            PriceRange::From800To1200
        } else if price < 2000.0 {
            PriceRange::From1200To2000
        } else {
            PriceRange::Over2000
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceRange::Under300 => "Moins de 300 DH",
            PriceRange::From300To500 => "300 - 500 DH",
            PriceRange::From500To800 => "500 - 800 DH",
            PriceRange::From800To1200 => "800 - 1200 DH",
            PriceRange::From1200To2000 => "1200 - 2000 DH",
            PriceRange::Over2000 => "Plus de 2000 DH",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|range| range.label() == label)
    }
}

impl Serialize for PriceRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for PriceRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        PriceRange::from_label(&label)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown price range '{}'", label)))
    }
}

/// Campos traducibles de un vehículo en un idioma
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslationFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleTranslations {
    #[serde(default)]
    pub fr: TranslationFields,
    #[serde(default)]
    pub en: TranslationFields,
}

/// Vehículo tal como lo consume el sitio público y el panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    pub brand: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub class: String,
    pub price: f64,
    pub price_range: PriceRange,
    pub cities: Vec<String>,
    pub features: Vec<String>,
    pub image: String,
    pub available: bool,
    #[serde(default)]
    pub translations: VehicleTranslations,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Vista de un vehículo en el idioma activo
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalizedVehicle<'a> {
    pub name: &'a str,
    pub brand: &'a str,
    pub vehicle_type: &'a str,
    pub class: &'a str,
    pub features: &'a [String],
}

impl Vehicle {
    /// Fusiona los campos primarios (francés) con la traducción del idioma pedido
    pub fn localized(&self, language: Language) -> LocalizedVehicle<'_> {
        match language {
            Language::Fr => LocalizedVehicle {
                name: &self.name,
                brand: &self.brand,
                vehicle_type: &self.vehicle_type,
                class: &self.class,
                features: &self.features,
            },
            Language::En => {
                let en = &self.translations.en;
                LocalizedVehicle {
                    name: non_empty(&en.name).unwrap_or(&self.name),
                    brand: &self.brand,
                    vehicle_type: non_empty(&en.vehicle_type).unwrap_or(&self.vehicle_type),
                    class: non_empty(&en.class).unwrap_or(&self.class),
                    features: &en.features,
                }
            }
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Identificador de un vehículo nuevo
pub fn new_vehicle_id() -> String {
    format!("v{}", Uuid::new_v4())
}

/// Fila de la tabla vehicles
#[derive(Debug, Clone, FromRow)]
pub struct VehicleRow {
    pub id: String,
    pub name: String,
    pub brand: String,
    #[sqlx(rename = "type")]
    pub vehicle_type: String,
    pub class: String,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub available: bool,
    pub created_at: DateTime<Utc>,
}

impl VehicleRow {
    /// Construye el vehículo de la API; la franja de precio se recalcula al leer
    pub fn into_vehicle(
        self,
        cities: Vec<String>,
        features: Vec<String>,
        translations: VehicleTranslations,
    ) -> Vehicle {
        let price = self.price.to_f64().unwrap_or_default();
        let image = self
            .image_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

        Vehicle {
            id: self.id,
            name: self.name,
            brand: self.brand,
            vehicle_type: self.vehicle_type,
            class: self.class,
            price,
            price_range: PriceRange::from_price(price),
            cities,
            features,
            image,
            available: self.available,
            translations,
            created_at: Some(self.created_at),
        }
    }
}
