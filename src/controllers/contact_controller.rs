use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::dto::api_response::ApiResponse;
use crate::dto::contact_dto::ContactRequest;
use crate::services::{ContactEmail, Mailer};
use crate::utils::errors::AppResult;

pub struct ContactController {
    mailer: Arc<dyn Mailer>,
}

impl ContactController {
    pub fn new(mailer: Arc<dyn Mailer>) -> Self {
        Self { mailer }
    }

    pub async fn send(&self, request: ContactRequest) -> AppResult<ApiResponse<()>> {
        let request = request.trimmed();
        request.validate()?;

        info!("📨 Mensaje de contacto de {}", request.email);
        self.mailer.send(&ContactEmail::from_request(&request)).await?;

        Ok(ApiResponse::message("Email sent successfully"))
    }
}
