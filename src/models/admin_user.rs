//! Modelo de usuario administrador
//!
//! Solo se consulta para emitir y validar el bearer token del back-office.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Usuario admin - mapea a la tabla admin_users
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AdminUser {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
}

/// Admin autenticado que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedAdmin {
    pub admin_id: Uuid,
    pub username: String,
}
