use cookie::{time::Duration, Cookie};
use tracing::{info, warn};

use crate::config::EnvironmentConfig;
use crate::dto::auth_dto::{LanguagePreferenceRequest, LoginForm};
use crate::middleware::language::LANGUAGE_COOKIE;
use crate::models::Language;
use crate::services::admin_auth_service::{session_cookie, verify_credentials};
use crate::utils::errors::{bad_request_error, AppResult};

const LANGUAGE_COOKIE_DAYS: i64 = 365;

pub struct AuthController<'a> {
    config: &'a EnvironmentConfig,
}

impl<'a> AuthController<'a> {
    pub fn new(config: &'a EnvironmentConfig) -> Self {
        Self { config }
    }

    /// Verifica las credenciales y devuelve la cookie de sesión
    pub fn login(&self, form: &LoginForm) -> AppResult<Cookie<'static>> {
        if let Err(e) = verify_credentials(&self.config.admin, form.username.trim(), &form.password) {
            warn!("🔒 Login fallido para '{}'", form.username);
            return Err(e);
        }

        info!("🔓 Sesión de administración iniciada");
        Ok(session_cookie(self.config.is_production()))
    }

    pub fn language_preference(&self, request: &LanguagePreferenceRequest) -> AppResult<(Language, Cookie<'static>)> {
        let language: Language = request
            .language
            .parse()
            .map_err(|_| bad_request_error("Unsupported language"))?;

        let cookie = Cookie::build((LANGUAGE_COOKIE, language.code()))
            .path("/")
            .max_age(Duration::days(LANGUAGE_COOKIE_DAYS))
            .build();
        Ok((language, cookie))
    }
}
