use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

// Request de login del back-office
#[derive(Debug, Deserialize, Validate)]
pub struct AdminLoginRequest {
    #[validate(length(min = 3, max = 50))]
    pub username: String,

    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

// Response de login con bearer token
#[derive(Debug, Serialize)]
pub struct AdminLoginResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub username: String,
}

// Response de verificación de token
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub valid: bool,
    pub username: String,
}
