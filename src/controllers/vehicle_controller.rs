use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse};
use crate::dto::ApiResponse;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_license_plate;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        // Validar campos
        request.validate()?;
        validate_license_plate(&request.license_plate)
            .map_err(|_| AppError::BadRequest("Formato de matrícula inválido".to_string()))?;

        // Verificar que la matrícula no exista
        if self
            .repository
            .license_plate_exists(&request.license_plate, None)
            .await?
        {
            return Err(AppError::Conflict(
                "La matrícula ya está registrada".to_string(),
            ));
        }

        let base_hourly_rate = to_decimal(request.base_hourly_rate, "base_hourly_rate")?;
        let per_km_rate = to_decimal(request.per_km_rate, "per_km_rate")?;

        let vehicle = self
            .repository
            .create(
                request.name,
                request.license_plate,
                request.seats,
                request.luggage,
                request.category.as_str().to_string(),
                base_hourly_rate,
                per_km_rate,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        Ok(vehicle.into())
    }

    pub async fn list(&self) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self.repository.list_all().await?;

        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        // Si cambia la matrícula, verificar que no choque con otro vehículo
        if let Some(license_plate) = &request.license_plate {
            validate_license_plate(license_plate)
                .map_err(|_| AppError::BadRequest("Formato de matrícula inválido".to_string()))?;

            if self
                .repository
                .license_plate_exists(license_plate, Some(id))
                .await?
            {
                return Err(AppError::Conflict(
                    "La matrícula ya está registrada".to_string(),
                ));
            }
        }

        let base_hourly_rate = request
            .base_hourly_rate
            .map(|rate| to_decimal(rate, "base_hourly_rate"))
            .transpose()?;
        let per_km_rate = request
            .per_km_rate
            .map(|rate| to_decimal(rate, "per_km_rate"))
            .transpose()?;

        let vehicle = self
            .repository
            .update(
                id,
                request.name,
                request.license_plate,
                request.seats,
                request.luggage,
                request.category.map(|c| c.as_str().to_string()),
                base_hourly_rate,
                per_km_rate,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo actualizado exitosamente".to_string(),
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
