use std::sync::Arc;
use tracing::info;
use validator::ValidationErrors;

use crate::dto::reservation_dto::{WhatsAppReservationRequest, WhatsAppReservationResponse};
use crate::models::Language;
use crate::repositories::VehicleStore;
use crate::services::whatsapp_service::{reservation_message, whatsapp_url, ReservationDetails};
use crate::utils::errors::{bad_request_error, not_found_error, validation_error, AppError, AppResult};
use crate::utils::validation::{validate_date, validate_phone};

pub struct ReservationController {
    vehicles: Arc<dyn VehicleStore>,
    whatsapp_number: String,
}

impl ReservationController {
    pub fn new(vehicles: Arc<dyn VehicleStore>, whatsapp_number: String) -> Self {
        Self {
            vehicles,
            whatsapp_number,
        }
    }

    pub async fn whatsapp_link(
        &self,
        request: WhatsAppReservationRequest,
        language: Language,
    ) -> AppResult<WhatsAppReservationResponse> {
        let fields = [
            request.vehicle_id.trim(),
            request.name.trim(),
            request.phone.trim(),
            request.start_date.trim(),
            request.end_date.trim(),
        ];
        if fields.iter().any(|field| field.is_empty()) {
            return Err(bad_request_error("Veuillez remplir tous les champs"));
        }
        let [vehicle_id, name, phone, start, end] = fields;

        let mut errors = ValidationErrors::new();
        if let Err(e) = validate_phone(phone) {
            errors.add("phone", e);
        }
        let start_date = validate_date(start).map_err(|e| errors.add("startDate", e)).ok();
        let end_date = validate_date(end).map_err(|e| errors.add("endDate", e)).ok();
        let (Some(start_date), Some(end_date)) = (start_date, end_date) else {
            return Err(AppError::Validation(errors));
        };
        if !errors.errors().is_empty() {
            return Err(AppError::Validation(errors));
        }
        if end_date < start_date {
            return Err(validation_error("endDate", "End date must not be before start date"));
        }

        let vehicle = self
            .vehicles
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", vehicle_id))?;
        if !vehicle.available {
            return Err(bad_request_error("Vehicle is not available"));
        }

        let details = ReservationDetails {
            customer_name: name,
            phone,
            start_date,
            end_date,
        };
        let message = reservation_message(&vehicle, request.lang.unwrap_or(language), &details);
        let url = whatsapp_url(&self.whatsapp_number, &message);

        info!("💬 Enlace de reserva generado para {}", vehicle.id);
        Ok(WhatsAppReservationResponse { url, message })
    }
}
