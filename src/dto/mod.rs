//! DTOs de la API
//!
//! Requests y responses serializables por recurso.

pub mod address_dto;
pub mod auth_dto;
pub mod contact_dto;
pub mod payment_dto;
pub mod pricing_dto;
pub mod reservation_dto;
pub mod route_dto;
pub mod vehicle_dto;

use serde::Serialize;

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: String) -> Self {
        Self {
            success: false,
            message: Some(message),
            data: None,
        }
    }
}
