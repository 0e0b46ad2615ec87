use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::{Vehicle, VehicleCategory};

// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(length(min = 5, max = 20))]
    pub license_plate: String,

    #[validate(range(min = 1, max = 9))]
    pub seats: i32,

    #[validate(range(min = 0, max = 20))]
    pub luggage: i32,

    pub category: VehicleCategory,

    #[validate(range(min = 0.0))]
    pub base_hourly_rate: f64,

    #[validate(range(min = 0.0))]
    pub per_km_rate: f64,
}

// Request para actualizar un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: Option<String>,

    #[validate(length(min = 5, max = 20))]
    pub license_plate: Option<String>,

    #[validate(range(min = 1, max = 9))]
    pub seats: Option<i32>,

    #[validate(range(min = 0, max = 20))]
    pub luggage: Option<i32>,

    pub category: Option<VehicleCategory>,

    #[validate(range(min = 0.0))]
    pub base_hourly_rate: Option<f64>,

    #[validate(range(min = 0.0))]
    pub per_km_rate: Option<f64>,
}

// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
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

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            license_plate: vehicle.license_plate,
            seats: vehicle.seats,
            luggage: vehicle.luggage,
            category: vehicle.category,
            base_hourly_rate: vehicle.base_hourly_rate,
            per_km_rate: vehicle.per_km_rate,
            created_at: vehicle.created_at,
            updated_at: vehicle.updated_at,
        }
    }
}
