//! Modelo de tarifas por vehículo
//!
//! Una fila de tarifa como máximo por vehículo (invariante del schema).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Tarifa activa de un vehículo - mapea a la tabla vehicle_pricing
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VehiclePricing {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub per_km_rate: Decimal,
    pub base_fare: Decimal,
    pub tax_rate: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fila de tarifa con los datos del vehículo asociado (para el listado admin)
#[derive(Debug, Clone, FromRow)]
pub struct VehiclePricingWithVehicle {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub per_km_rate: Decimal,
    pub base_fare: Decimal,
    pub tax_rate: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub vehicle_name: String,
    pub license_plate: String,
}
