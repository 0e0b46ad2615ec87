//! Emisión/validación del bearer token y mapeo de errores a HTTP.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use uuid::Uuid;

use vtc_booking::models::admin_user::AdminUser;
use vtc_booking::services::jwt_service::{AdminClaims, JwtConfig, JwtService};
use vtc_booking::utils::errors::AppError;

fn jwt_service(secret: &str) -> JwtService {
    JwtService::new(JwtConfig {
        secret: secret.to_string(),
        algorithm: Algorithm::HS256,
        access_token_duration: Duration::hours(24),
    })
}

fn admin() -> AdminUser {
    AdminUser {
        id: Uuid::new_v4(),
        username: "admin".to_string(),
        password_hash: "$2b$12$unused".to_string(),
    }
}

#[test]
fn test_fresh_token_is_valid() {
    let service = jwt_service("secret-1");
    let admin = admin();

    let (token, _) = service.generate_access_token(&admin).unwrap();
    let claims = service.validate_token(&token).unwrap();

    assert_eq!(claims.username, "admin");
    assert_eq!(claims.role, "admin");
    assert_eq!(claims.sub, admin.id.to_string());
}

#[test]
fn test_expired_token_maps_to_unauthorized() {
    let service = jwt_service("secret-1");
    let admin = admin();

    let now = Utc::now();
    let claims = AdminClaims {
        sub: admin.id.to_string(),
        username: admin.username,
        role: "admin".to_string(),
        exp: (now - Duration::hours(2)).timestamp(),
        iat: (now - Duration::hours(3)).timestamp(),
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret("secret-1".as_ref()),
    )
    .unwrap();

    let error = service.validate_token(&token).unwrap_err();
    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn test_malformed_token_maps_to_unauthorized() {
    let service = jwt_service("secret-1");

    let error = service.validate_token("garbage.token.here").unwrap_err();
    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn test_error_status_mapping() {
    assert_eq!(
        AppError::Conflict("duplicado".to_string())
            .into_response()
            .status(),
        StatusCode::CONFLICT
    );
    assert_eq!(
        AppError::RateLimitExceeded {
            retry_after_seconds: 30
        }
        .into_response()
        .status(),
        StatusCode::TOO_MANY_REQUESTS
    );
    assert_eq!(
        AppError::NotFound("no está".to_string())
            .into_response()
            .status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        AppError::BadRequest("mal".to_string())
            .into_response()
            .status(),
        StatusCode::BAD_REQUEST
    );
}
