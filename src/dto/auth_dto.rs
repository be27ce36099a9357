use serde::Deserialize;

// Formulario de login del panel
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

// Preferencia de idioma del visitante
#[derive(Debug, Deserialize)]
pub struct LanguagePreferenceRequest {
    pub language: String,
}
