use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::pricing::{VehiclePricing, VehiclePricingWithVehicle};

// Request para crear una tarifa de vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePricingRequest {
    pub vehicle_id: Uuid,

    #[validate(range(min = 0.0))]
    pub per_km_rate: f64,

    #[validate(range(min = 0.0))]
    pub base_fare: f64,

    /// Porcentaje de impuesto aplicado, p. ej. 10.0
    #[validate(range(min = 0.0, max = 100.0))]
    pub tax_rate: f64,
}

// Request para actualizar una tarifa
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePricingRequest {
    #[validate(range(min = 0.0))]
    pub per_km_rate: Option<f64>,

    #[validate(range(min = 0.0))]
    pub base_fare: Option<f64>,

    #[validate(range(min = 0.0, max = 100.0))]
    pub tax_rate: Option<f64>,
}

// Response de tarifa
#[derive(Debug, Serialize)]
pub struct PricingResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub per_km_rate: Decimal,
    pub base_fare: Decimal,
    pub tax_rate: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_plate: Option<String>,
}

impl From<VehiclePricing> for PricingResponse {
    fn from(pricing: VehiclePricing) -> Self {
        Self {
            id: pricing.id,
            vehicle_id: pricing.vehicle_id,
            per_km_rate: pricing.per_km_rate,
            base_fare: pricing.base_fare,
            tax_rate: pricing.tax_rate,
            created_at: pricing.created_at,
            updated_at: pricing.updated_at,
            vehicle_name: None,
            license_plate: None,
        }
    }
}

impl From<VehiclePricingWithVehicle> for PricingResponse {
    fn from(row: VehiclePricingWithVehicle) -> Self {
        Self {
            id: row.id,
            vehicle_id: row.vehicle_id,
            per_km_rate: row.per_km_rate,
            base_fare: row.base_fare,
            tax_rate: row.tax_rate,
            created_at: row.created_at,
            updated_at: row.updated_at,
            vehicle_name: Some(row.vehicle_name),
            license_plate: Some(row.license_plate),
        }
    }
}
