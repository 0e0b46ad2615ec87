use serde::{Deserialize, Serialize};
use validator::Validate;

// Request del formulario público de contacto
#[derive(Debug, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 2, max = 100))]
    pub full_name: String,

    #[validate(email)]
    pub email: String,

    #[validate(regex = "crate::utils::validation::PHONE_RE")]
    pub phone: Option<String>,

    #[validate(length(max = 150))]
    pub subject: Option<String>,

    #[validate(length(min = 10, max = 1000))]
    pub message: String,

    /// Honeypot: campo oculto que los usuarios reales dejan vacío
    #[serde(default)]
    pub website: String,
}

// Confirmación de recepción del mensaje
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub received: bool,
}
