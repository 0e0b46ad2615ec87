use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::pricing::{VehiclePricing, VehiclePricingWithVehicle};
use crate::utils::errors::AppError;

pub struct PricingRepository {
    pool: PgPool,
}

impl PricingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Verificar si el vehículo ya tiene una fila de tarifa.
    /// Invariante: una tarifa como máximo por vehículo.
    pub async fn exists_for_vehicle(&self, vehicle_id: Uuid) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM vehicle_pricing WHERE vehicle_id = $1)",
        )
        .bind(vehicle_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn create(
        &self,
        vehicle_id: Uuid,
        per_km_rate: Decimal,
        base_fare: Decimal,
        tax_rate: Decimal,
    ) -> Result<VehiclePricing, AppError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let pricing = sqlx::query_as::<_, VehiclePricing>(
            r#"
            INSERT INTO vehicle_pricing (id, vehicle_id, per_km_rate, base_fare, tax_rate, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(vehicle_id)
        .bind(per_km_rate)
        .bind(base_fare)
        .bind(tax_rate)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(pricing)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<VehiclePricing>, AppError> {
        let pricing =
            sqlx::query_as::<_, VehiclePricing>("SELECT * FROM vehicle_pricing WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(pricing)
    }

    /// Listado con el nombre y matrícula del vehículo para las cards admin
    pub async fn list_with_vehicles(&self) -> Result<Vec<VehiclePricingWithVehicle>, AppError> {
        let rows = sqlx::query_as::<_, VehiclePricingWithVehicle>(
            r#"
            SELECT p.id, p.vehicle_id, p.per_km_rate, p.base_fare, p.tax_rate,
                   p.created_at, p.updated_at,
                   v.name AS vehicle_name, v.license_plate
            FROM vehicle_pricing p
            JOIN vehicles v ON v.id = p.vehicle_id
            ORDER BY p.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn update(
        &self,
        id: Uuid,
        per_km_rate: Option<Decimal>,
        base_fare: Option<Decimal>,
        tax_rate: Option<Decimal>,
    ) -> Result<VehiclePricing, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Tarifa no encontrada".to_string()))?;

        let pricing = sqlx::query_as::<_, VehiclePricing>(
            r#"
            UPDATE vehicle_pricing
            SET per_km_rate = $2, base_fare = $3, tax_rate = $4, updated_at = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(per_km_rate.unwrap_or(current.per_km_rate))
        .bind(base_fare.unwrap_or(current.base_fare))
        .bind(tax_rate.unwrap_or(current.tax_rate))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(pricing)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vehicle_pricing WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Tarifa no encontrada".to_string()));
        }

        Ok(())
    }
}
