use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: String,
        license_plate: String,
        seats: i32,
        luggage: i32,
        category: String,
        base_hourly_rate: Decimal,
        per_km_rate: Decimal,
    ) -> Result<Vehicle, AppError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (id, name, license_plate, seats, luggage, category, base_hourly_rate, per_km_rate, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(license_plate)
        .bind(seats)
        .bind(luggage)
        .bind(category)
        .bind(base_hourly_rate)
        .bind(per_km_rate)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn list_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles =
            sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(vehicles)
    }

    /// Verificar si una matrícula ya está registrada, excluyendo
    /// opcionalmente un vehículo (para updates sobre sí mismo)
    pub async fn license_plate_exists(
        &self,
        license_plate: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM vehicles
                WHERE license_plate = $1 AND ($2::uuid IS NULL OR id != $2)
            )
            "#,
        )
        .bind(license_plate)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        license_plate: Option<String>,
        seats: Option<i32>,
        luggage: Option<i32>,
        category: Option<String>,
        base_hourly_rate: Option<Decimal>,
        per_km_rate: Option<Decimal>,
    ) -> Result<Vehicle, AppError> {
        // Obtener vehículo actual
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET name = $2, license_plate = $3, seats = $4, luggage = $5, category = $6,
                base_hourly_rate = $7, per_km_rate = $8, updated_at = $9
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name.unwrap_or(current.name))
        .bind(license_plate.unwrap_or(current.license_plate))
        .bind(seats.unwrap_or(current.seats))
        .bind(luggage.unwrap_or(current.luggage))
        .bind(category.unwrap_or(current.category))
        .bind(base_hourly_rate.unwrap_or(current.base_hourly_rate))
        .bind(per_km_rate.unwrap_or(current.per_km_rate))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Vehículo no encontrado".to_string()));
        }

        Ok(())
    }
}
