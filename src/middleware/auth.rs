//! Middleware de autenticación JWT
//!
//! Extrae el bearer token del header Authorization, valida firma y
//! expiración, y comprueba que el administrador sigue existiendo.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::models::admin_user::{AdminUser, AuthenticatedAdmin};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Middleware de autenticación para las rutas del back-office
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Extraer token del header Authorization
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_str| auth_str.to_str().ok())
        .and_then(|auth_str| auth_str.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("Token de autorización requerido".to_string()))?;

    // Decodificar y validar JWT
    let claims = state.jwt.validate_token(auth_header)?;

    let admin_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Unauthorized("ID de administrador inválido".to_string()))?;

    // Verificar que el admin existe en la base de datos
    let admin = sqlx::query_as::<_, AdminUser>(
        "SELECT id, username, password_hash FROM admin_users WHERE id = $1",
    )
    .bind(admin_id)
    .fetch_optional(&state.pool)
    .await?
    .ok_or_else(|| AppError::Unauthorized("Administrador no encontrado".to_string()))?;

    // Inyectar admin autenticado en las extensions
    request.extensions_mut().insert(AuthenticatedAdmin {
        admin_id: admin.id,
        username: admin.username,
    });

    Ok(next.run(request).await)
}
