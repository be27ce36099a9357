//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use anyhow::Context;
use std::env;

use super::database::DatabaseConfig;

/// Número de WhatsApp del negocio, sin "+" (formato wa.me)
pub const DEFAULT_WHATSAPP_NUMBER: &str = "212661482890";

/// Credenciales del panel de administración
#[derive(Debug, Clone, Default)]
pub struct AdminCredentials {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Configuración del relay SMTP del formulario de contacto
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    pub from: String,
    pub to: String,
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub log_level: String,
    pub database: DatabaseConfig,
    pub admin: AdminCredentials,
    pub smtp: Option<SmtpConfig>,
    pub whatsapp_number: String,
    pub cors_origins: Vec<String>,
    pub rate_limit_requests: u32,
    pub rate_limit_window: u64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            log_level: "debug".to_string(),
            database: DatabaseConfig::default(),
            admin: AdminCredentials::default(),
            smtp: None,
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            cors_origins: Vec::new(),
            rate_limit_requests: 10,
            rate_limit_window: 60,
        }
    }
}

impl EnvironmentConfig {
    /// Cargar la configuración desde las variables de entorno
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();
        let environment = env::var("ENVIRONMENT").unwrap_or(defaults.environment);
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| {
            if environment == "development" { "debug".to_string() } else { "info".to_string() }
        });

        Ok(Self {
            port: match env::var("PORT") {
                Ok(value) => value.parse().context("PORT must be a valid number")?,
                Err(_) => defaults.port,
            },
            host: env::var("HOST").unwrap_or(defaults.host),
            log_level,
            database: DatabaseConfig::from_env()?,
            admin: AdminCredentials {
                username: non_empty_var("ADMIN_USERNAME"),
                password: non_empty_var("ADMIN_PASSWORD"),
            },
            smtp: smtp_from_env()?,
            whatsapp_number: env::var("WHATSAPP_NUMBER").unwrap_or(defaults.whatsapp_number),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            rate_limit_requests: match env::var("RATE_LIMIT_REQUESTS") {
                Ok(value) => value.parse().context("RATE_LIMIT_REQUESTS must be a valid number")?,
                Err(_) => defaults.rate_limit_requests,
            },
            rate_limit_window: match env::var("RATE_LIMIT_WINDOW") {
                Ok(value) => value.parse().context("RATE_LIMIT_WINDOW must be a valid number")?,
                Err(_) => defaults.rate_limit_window,
            },
            environment,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// El relay SMTP sólo se configura cuando están presentes las seis variables
fn smtp_from_env() -> anyhow::Result<Option<SmtpConfig>> {
    let (Some(host), Some(port), Some(user), Some(pass), Some(from), Some(to)) = (
        non_empty_var("EMAIL_HOST"),
        non_empty_var("EMAIL_PORT"),
        non_empty_var("EMAIL_USER"),
        non_empty_var("EMAIL_PASS"),
        non_empty_var("EMAIL_FROM"),
        non_empty_var("EMAIL_TO"),
    ) else {
        return Ok(None);
    };

    Ok(Some(SmtpConfig {
        host,
        port: port.parse().context("EMAIL_PORT must be a valid number")?,
        user,
        pass,
        from,
        to,
    }))
}
