//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use sqlx::PgPool;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::environment::EnvironmentConfig;
use crate::middleware::rate_limit::RateLimitState;
use crate::repositories::{VehicleRepository, VehicleStore, ViewCountRepository, ViewCountStore};
use crate::services::{Mailer, SmtpMailer, UnconfiguredMailer, ViewCounter};
use crate::utils::errors::AppResult;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub vehicles: Arc<dyn VehicleStore>,
    pub view_counter: ViewCounter,
    pub mailer: Arc<dyn Mailer>,
    pub rate_limit: RateLimitState,
}

impl AppState {
    /// Estado de producción sobre PostgreSQL
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> AppResult<Self> {
        let mailer: Arc<dyn Mailer> = match &config.smtp {
            Some(smtp) => {
                info!("📧 Relay SMTP configurado: {}:{}", smtp.host, smtp.port);
                Arc::new(SmtpMailer::new(smtp)?)
            }
            None => {
                warn!("⚠️ Variables EMAIL_* incompletas, el formulario de contacto no enviará correos");
                Arc::new(UnconfiguredMailer)
            }
        };

        Ok(Self::from_parts(
            config,
            Arc::new(VehicleRepository::new(pool.clone())),
            Arc::new(ViewCountRepository::new(pool)),
            mailer,
        ))
    }

    /// Construir el estado con implementaciones arbitrarias de los almacenes
    pub fn from_parts(
        config: EnvironmentConfig,
        vehicles: Arc<dyn VehicleStore>,
        view_counts: Arc<dyn ViewCountStore>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        let rate_limit = RateLimitState::new(&config);
        Self {
            config,
            vehicles,
            view_counter: ViewCounter::new(view_counts),
            mailer,
            rate_limit,
        }
    }
}
