//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y la categoría comercial
//! (confort o van) con sus capacidades.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Categoría comercial del vehículo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    Confort,
    Van,
}

impl VehicleCategory {
    /// Plazas pasajero por categoría: 3 para confort, 8 para van
    pub fn passenger_capacity(&self) -> i32 {
        match self {
            VehicleCategory::Confort => 3,
            VehicleCategory::Van => 8,
        }
    }

    /// Capacidad de equipaje orientativa
    pub fn luggage_capacity(&self) -> i32 {
        match self {
            VehicleCategory::Confort => 3,
            VehicleCategory::Van => 8,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleCategory::Confort => "confort",
            VehicleCategory::Van => "van",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "confort" => Some(VehicleCategory::Confort),
            "van" => Some(VehicleCategory::Van),
            _ => None,
        }
    }
}

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub name: String,
    pub license_plate: String,
    pub seats: i32,
    pub luggage: i32,
    pub category: String,
    pub base_hourly_rate: Decimal,
    pub per_km_rate: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vehicle {
    pub fn category_enum(&self) -> Option<VehicleCategory> {
        VehicleCategory::from_str(&self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_capacities() {
        assert_eq!(VehicleCategory::Confort.passenger_capacity(), 3);
        assert_eq!(VehicleCategory::Van.passenger_capacity(), 8);
    }

    #[test]
    fn test_category_roundtrip() {
        assert_eq!(VehicleCategory::from_str("confort"), Some(VehicleCategory::Confort));
        assert_eq!(VehicleCategory::from_str("van"), Some(VehicleCategory::Van));
        assert_eq!(VehicleCategory::from_str("berline"), None);
        assert_eq!(VehicleCategory::Van.as_str(), "van");
    }
}
