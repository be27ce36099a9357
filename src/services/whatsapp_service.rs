//! Enlace de reserva por WhatsApp
//!
//! La reserva no crea estado en el servidor: se construye un enlace `wa.me`
//! con el mensaje ya redactado.

use chrono::NaiveDate;

use crate::models::{Language, Vehicle};

#[derive(Debug, Clone, PartialEq)]
pub struct ReservationDetails<'a> {
    pub customer_name: &'a str,
    pub phone: &'a str,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Mensaje en francés con el nombre del vehículo en el idioma activo
pub fn reservation_message(vehicle: &Vehicle, language: Language, details: &ReservationDetails<'_>) -> String {
    let view = vehicle.localized(language);
    format!(
        "Bonjour, je souhaite réserver le véhicule {} ({}).\n\nNom: {}\nTéléphone: {}\nDate de début: {}\nDate de fin: {}\n\nMerci.",
        view.name,
        vehicle.brand,
        details.customer_name,
        details.phone,
        details.start_date.format("%Y-%m-%d"),
        details.end_date.format("%Y-%m-%d"),
    )
}

pub fn whatsapp_url(number: &str, message: &str) -> String {
    let number: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("https://wa.me/{}?text={}", number, urlencoding::encode(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PriceRange, TranslationFields, VehicleTranslations};

    fn clio() -> Vehicle {
        Vehicle {
            id: "v1".to_string(),
            name: "Clio".to_string(),
            brand: "Renault".to_string(),
            vehicle_type: "Citadine".to_string(),
            class: "Économique".to_string(),
            price: 250.0,
            price_range: PriceRange::Under300,
            cities: vec!["Rabat".to_string()],
            features: vec!["GPS".to_string()],
            image: String::new(),
            available: true,
            translations: VehicleTranslations {
                fr: TranslationFields::default(),
                en: TranslationFields {
                    name: Some("Clio V".to_string()),
                    ..TranslationFields::default()
                },
            },
            created_at: None,
        }
    }

    fn details() -> ReservationDetails<'static> {
        ReservationDetails {
            customer_name: "Karim",
            phone: "0661482890",
            start_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 7, 5).unwrap(),
        }
    }

    #[test]
    fn test_reservation_message_template() {
        let message = reservation_message(&clio(), Language::Fr, &details());
        assert_eq!(
            message,
            "Bonjour, je souhaite réserver le véhicule Clio (Renault).\n\nNom: Karim\nTéléphone: 0661482890\nDate de début: 2025-07-01\nDate de fin: 2025-07-05\n\nMerci."
        );
        let message = reservation_message(&clio(), Language::En, &details());
        assert!(message.starts_with("Bonjour, je souhaite réserver le véhicule Clio V (Renault)."));
    }

    #[test]
    fn test_whatsapp_url_encodes_message() {
        let url = whatsapp_url("+212 661482890", "Bonjour, ça va?\nMerci.");
        assert_eq!(url, "https://wa.me/212661482890?text=Bonjour%2C%20%C3%A7a%20va%3F%0AMerci.");
    }
}
