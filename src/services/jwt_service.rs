use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::environment::EnvironmentConfig;
use crate::models::admin_user::AdminUser;
use crate::utils::errors::AppError;

/// Claims del bearer token de administración
#[derive(Debug, Serialize, Deserialize)]
pub struct AdminClaims {
    pub sub: String, // admin_id
    pub username: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Configuración JWT
pub struct JwtConfig {
    pub secret: String,
    pub algorithm: Algorithm,
    pub access_token_duration: Duration,
}

impl JwtConfig {
    pub fn from_environment(config: &EnvironmentConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            algorithm: Algorithm::HS256,
            access_token_duration: Duration::seconds(config.jwt_expiration as i64),
        }
    }
}

/// Servicio JWT
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_ref());
        let decoding_key = DecodingKey::from_secret(config.secret.as_ref());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Genera un token de acceso para un admin, con su fecha de expiración
    pub fn generate_access_token(
        &self,
        admin: &AdminUser,
    ) -> Result<(String, DateTime<Utc>), AppError> {
        let now = Utc::now();
        let expires_at = now + self.config.access_token_duration;

        let claims = AdminClaims {
            sub: admin.id.to_string(),
            username: admin.username.clone(),
            role: "admin".to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::new(self.config.algorithm),
            &claims,
            &self.encoding_key,
        )
        .map_err(|e| AppError::Internal(format!("Error generating access token: {}", e)))?;

        Ok((token, expires_at))
    }

    /// Valida firma y expiración, y devuelve los claims
    pub fn validate_token(&self, token: &str) -> Result<AdminClaims, AppError> {
        let validation = Validation::new(self.config.algorithm);

        decode::<AdminClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn test_service() -> JwtService {
        JwtService::new(JwtConfig {
            secret: "test-secret-key".to_string(),
            algorithm: Algorithm::HS256,
            access_token_duration: Duration::hours(24),
        })
    }

    fn test_admin() -> AdminUser {
        AdminUser {
            id: Uuid::new_v4(),
            username: "admin".to_string(),
            password_hash: "$2b$12$placeholder".to_string(),
        }
    }

    #[test]
    fn test_generate_and_validate_token() {
        let jwt_service = test_service();
        let admin = test_admin();

        let (token, expires_at) = jwt_service.generate_access_token(&admin).unwrap();
        assert!(!token.is_empty());
        assert!(expires_at > Utc::now());

        let claims = jwt_service.validate_token(&token).unwrap();
        assert_eq!(claims.sub, admin.id.to_string());
        assert_eq!(claims.username, "admin");
        assert_eq!(claims.role, "admin");
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let jwt_service = test_service();
        let admin = test_admin();

        // Token con exp dos horas en el pasado (más allá del leeway)
        let now = Utc::now();
        let claims = AdminClaims {
            sub: admin.id.to_string(),
            username: admin.username.clone(),
            role: "admin".to_string(),
            exp: (now - Duration::hours(2)).timestamp(),
            iat: (now - Duration::hours(3)).timestamp(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret("test-secret-key".as_ref()),
        )
        .unwrap();

        assert!(jwt_service.validate_token(&token).is_err());
    }

    #[test]
    fn test_malformed_token_is_rejected() {
        let jwt_service = test_service();
        assert!(jwt_service.validate_token("not-a-jwt").is_err());
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let jwt_service = test_service();
        let other_service = JwtService::new(JwtConfig {
            secret: "another-secret".to_string(),
            algorithm: Algorithm::HS256,
            access_token_duration: Duration::hours(24),
        });

        let (token, _) = other_service.generate_access_token(&test_admin()).unwrap();
        assert!(jwt_service.validate_token(&token).is_err());
    }
}
