//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! del formulario de reserva y del back-office.

use chrono::{DateTime, Duration, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Teléfono francés o internacional: dígitos, espacios, puntos, guiones,
    /// con prefijo + opcional
    pub static ref PHONE_RE: Regex = Regex::new(r"^\+?[0-9][0-9 .\-]{8,18}$").unwrap();
}

/// Validar formato de teléfono (10 a 15 dígitos útiles)
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    if !PHONE_RE.is_match(value.trim()) || digits < 10 || digits > 15 {
        let mut error = ValidationError::new("phone");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de coordenadas GPS
pub fn validate_coordinates(lat: f64, lng: f64) -> Result<(), ValidationError> {
    if !(-90.0..=90.0).contains(&lat) {
        let mut error = ValidationError::new("latitude");
        error.add_param("value".into(), &lat);
        error.add_param("range".into(), &"-90.0 to 90.0".to_string());
        return Err(error);
    }

    if !(-180.0..=180.0).contains(&lng) {
        let mut error = ValidationError::new("longitude");
        error.add_param("value".into(), &lng);
        error.add_param("range".into(), &"-180.0 to 180.0".to_string());
        return Err(error);
    }

    Ok(())
}

/// Validar que la fecha de recogida no esté en el pasado.
/// Margen de 5 minutos para relojes de cliente desincronizados.
pub fn validate_future_datetime(value: &DateTime<Utc>) -> Result<(), ValidationError> {
    if *value < Utc::now() - Duration::minutes(5) {
        let mut error = ValidationError::new("date_in_past");
        error.add_param("value".into(), &value.to_rfc3339());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de matrícula de vehículo
pub fn validate_license_plate(value: &str) -> Result<(), ValidationError> {
    // Formato básico: XX-123-XX o similar
    let clean_plate = value.replace([' ', '-', '_'], "");
    if clean_plate.len() < 5 || clean_plate.len() > 10 {
        let mut error = ValidationError::new("license_plate");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    if !clean_plate.chars().all(|c| c.is_ascii_alphanumeric()) {
        let mut error = ValidationError::new("license_plate");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea positivo
pub fn validate_positive<T: PartialOrd + std::fmt::Display + num_traits::Zero + serde::Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("0612345678").is_ok());
        assert!(validate_phone("+33 6 12 34 56 78").is_ok());
        assert!(validate_phone("06.12.34.56.78").is_ok());
        assert!(validate_phone("123").is_err());
        assert!(validate_phone("phone-number").is_err());
        assert!(validate_phone("12345678901234567890").is_err());
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("Paris").is_ok());
        assert!(validate_not_empty("   ").is_err());
    }

    #[test]
    fn test_validate_coordinates() {
        assert!(validate_coordinates(48.8566, 2.3522).is_ok());
        assert!(validate_coordinates(91.0, 2.0).is_err());
        assert!(validate_coordinates(48.0, -181.0).is_err());
    }

    #[test]
    fn test_validate_future_datetime() {
        let tomorrow = Utc::now() + Duration::days(1);
        assert!(validate_future_datetime(&tomorrow).is_ok());

        let yesterday = Utc::now() - Duration::days(1);
        assert!(validate_future_datetime(&yesterday).is_err());
    }

    #[test]
    fn test_validate_license_plate() {
        assert!(validate_license_plate("AB-123-CD").is_ok());
        assert!(validate_license_plate("A").is_err());
        assert!(validate_license_plate("AB-123-CD!!").is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive(5).is_ok());
        assert!(validate_positive(0).is_err());
        assert!(validate_positive(-5).is_err());
    }
}
