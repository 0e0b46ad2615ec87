use sqlx::PgPool;
use std::sync::Arc;
use validator::Validate;

use crate::dto::auth_dto::{AdminLoginRequest, AdminLoginResponse};
use crate::dto::ApiResponse;
use crate::repositories::admin_repository::AdminRepository;
use crate::services::jwt_service::JwtService;
use crate::utils::errors::AppError;

pub struct AuthController {
    repository: AdminRepository,
    jwt: Arc<JwtService>,
}

impl AuthController {
    pub fn new(pool: PgPool, jwt: Arc<JwtService>) -> Self {
        Self {
            repository: AdminRepository::new(pool),
            jwt,
        }
    }

    /// Login del back-office: username + password contra admin_users,
    /// verificación bcrypt y emisión del bearer token.
    pub async fn login(
        &self,
        request: AdminLoginRequest,
    ) -> Result<ApiResponse<AdminLoginResponse>, AppError> {
        request.validate()?;

        let admin = self
            .repository
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        let password_ok = bcrypt::verify(&request.password, &admin.password_hash)
            .map_err(|e| AppError::Internal(format!("Error verificando credenciales: {}", e)))?;

        if !password_ok {
            log::warn!("🔐 Login fallido para '{}'", request.username);
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        let (token, expires_at) = self.jwt.generate_access_token(&admin)?;

        log::info!("🔐 Login correcto para '{}'", admin.username);

        Ok(ApiResponse::success_with_message(
            AdminLoginResponse {
                token,
                expires_at,
                username: admin.username,
            },
            "Autenticación correcta".to_string(),
        ))
    }
}
