//! Constantes del catálogo
//!
//! Listas de opciones de filtro del sitio público y del formulario de
//! administración, con el valor centinela "todos" de cada idioma.

use serde::Serialize;

use super::language::Language;
use super::vehicle::PriceRange;

pub const MOROCCAN_CITIES: [&str; 38] = [
    "Agadir",
    "Al Hoceima",
    "Assilah",
    "Azemmour",
    "Beni Mellal",
    "Berkane",
    "Berrechid",
    "Casablanca",
    "Chefchaouen",
    "Dakhla",
    "El Jadida",
    "Errachidia",
    "Essaouira",
    "Fès",
    "Fnideq",
    "Guelmim",
    "Ifrane",
    "Kénitra",
    "Khouribga",
    "Laâyoune",
    "Larache",
    "Marrakech",
    "Meknès",
    "Mohammedia",
    "Nador",
    "Ouarzazate",
    "Oujda",
    "Rabat",
    "Safi",
    "Salé",
    "Settat",
    "Sidi Ifni",
    "Tanger",
    "Tan-Tan",
    "Taroudant",
    "Taza",
    "Tétouan",
    "Tiznit",
];

pub const CAR_BRANDS: [&str; 18] = [
    "Audi",
    "BMW",
    "Citroën",
    "Dacia",
    "Fiat",
    "Ford",
    "Honda",
    "Hyundai",
    "Kia",
    "Mercedes",
    "Nissan",
    "Opel",
    "Peugeot",
    "Renault",
    "Seat",
    "Skoda",
    "Toyota",
    "Volkswagen",
];

pub const CAR_TYPES_FR: [&str; 9] = [
    "Berline", "Cabriolet", "Citadine", "Coupé", "Crossover", "Monospace", "SUV", "4x4", "Utilitaire",
];

pub const CAR_TYPES_EN: [&str; 9] = [
    "Sedan", "Convertible", "City car", "Coupe", "Crossover", "Minivan", "SUV", "4x4", "Utility",
];

pub const CAR_CLASSES_FR: [&str; 6] = ["Économique", "Confort", "Luxe", "Premium", "SUV", "Utilitaire"];

pub const CAR_CLASSES_EN: [&str; 6] = ["Economy", "Comfort", "Luxury", "Premium", "SUV", "Utility"];

/// Dimensiones del filtro del catálogo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    City,
    Brand,
    Type,
    Price,
    Class,
}

impl FilterField {
    /// Valor que significa "sin filtro" en el idioma activo
    pub fn all_label(&self, language: Language) -> &'static str {
        match (self, language) {
            (FilterField::City, Language::Fr) => "Toutes les villes",
            (FilterField::City, Language::En) => "All cities",
            (FilterField::Brand, Language::Fr) => "Toutes les marques",
            (FilterField::Brand, Language::En) => "All brands",
            (FilterField::Type, Language::Fr) => "Tous les types",
            (FilterField::Type, Language::En) => "All types",
            (FilterField::Price, Language::Fr) => "Tous les prix",
            (FilterField::Price, Language::En) => "All prices",
            (FilterField::Class, Language::Fr) => "Toutes les classes",
            (FilterField::Class, Language::En) => "All classes",
        }
    }
}

pub fn car_types(language: Language) -> &'static [&'static str] {
    match language {
        Language::Fr => &CAR_TYPES_FR,
        Language::En => &CAR_TYPES_EN,
    }
}

pub fn car_classes(language: Language) -> &'static [&'static str] {
    match language {
        Language::Fr => &CAR_CLASSES_FR,
        Language::En => &CAR_CLASSES_EN,
    }
}

/// Opciones de los desplegables del catálogo, cada lista encabezada por su centinela
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CatalogOptions {
    pub language: Language,
    pub cities: Vec<String>,
    pub brands: Vec<String>,
    pub types: Vec<String>,
    pub prices: Vec<String>,
    pub classes: Vec<String>,
}

impl CatalogOptions {
    pub fn for_language(language: Language) -> Self {
        Self {
            language,
            cities: with_all(FilterField::City.all_label(language), MOROCCAN_CITIES),
            brands: with_all(FilterField::Brand.all_label(language), CAR_BRANDS),
            types: with_all(FilterField::Type.all_label(language), car_types(language).iter().copied()),
            prices: with_all(
                FilterField::Price.all_label(language),
                PriceRange::ALL.iter().map(|range| range.label()),
            ),
            classes: with_all(FilterField::Class.all_label(language), car_classes(language).iter().copied()),
        }
    }
}

fn with_all(all: &'static str, values: impl IntoIterator<Item = &'static str>) -> Vec<String> {
    std::iter::once(all).chain(values).map(str::to_string).collect()
}
