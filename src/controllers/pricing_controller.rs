use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::pricing_dto::{CreatePricingRequest, PricingResponse, UpdatePricingRequest};
use crate::dto::ApiResponse;
use crate::repositories::pricing_repository::PricingRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;

pub struct PricingController {
    repository: PricingRepository,
    vehicles: VehicleRepository,
}

impl PricingController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PricingRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreatePricingRequest,
    ) -> Result<ApiResponse<PricingResponse>, AppError> {
        request.validate()?;

        // El vehículo debe existir
        if self.vehicles.find_by_id(request.vehicle_id).await?.is_none() {
            return Err(AppError::NotFound("Vehículo no encontrado".to_string()));
        }

        // Invariante: una tarifa como máximo por vehículo
        if self.repository.exists_for_vehicle(request.vehicle_id).await? {
            return Err(AppError::Conflict(
                "El vehículo ya tiene una tarifa activa".to_string(),
            ));
        }

        let pricing = self
            .repository
            .create(
                request.vehicle_id,
                to_decimal(request.per_km_rate, "per_km_rate")?,
                to_decimal(request.base_fare, "base_fare")?,
                to_decimal(request.tax_rate, "tax_rate")?,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            pricing.into(),
            "Tarifa creada exitosamente".to_string(),
        ))
    }

    pub async fn list(&self) -> Result<Vec<PricingResponse>, AppError> {
        let rows = self.repository.list_with_vehicles().await?;

        Ok(rows.into_iter().map(PricingResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdatePricingRequest,
    ) -> Result<ApiResponse<PricingResponse>, AppError> {
        request.validate()?;

        let pricing = self
            .repository
            .update(
                id,
                request
                    .per_km_rate
                    .map(|rate| to_decimal(rate, "per_km_rate"))
                    .transpose()?,
                request
                    .base_fare
                    .map(|fare| to_decimal(fare, "base_fare"))
                    .transpose()?,
                request
                    .tax_rate
                    .map(|rate| to_decimal(rate, "tax_rate"))
                    .transpose()?,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            pricing.into(),
            "Tarifa actualizada exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        Ok(())
    }
}

fn to_decimal(value: f64, field: &str) -> Result<Decimal, AppError> {
    Decimal::from_f64_retain(value)
        .ok_or_else(|| AppError::BadRequest(format!("Valor inválido para {}", field)))
}
