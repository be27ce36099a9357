use serde::{Deserialize, Serialize};

use crate::models::Language;

// Datos del modal de reserva; nada se persiste en el servidor
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhatsAppReservationRequest {
    #[serde(default)]
    pub vehicle_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub lang: Option<Language>,
}

#[derive(Debug, Serialize)]
pub struct WhatsAppReservationResponse {
    pub url: String,
    pub message: String,
}
