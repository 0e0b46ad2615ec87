use uuid::Uuid;
use validator::Validate;

use crate::dto::reservation_dto::{
    CreateReservationRequest, EstimateRequest, PaginatedResponse, PriceEstimateResponse,
    ReservationDetailResponse, ReservationListQuery, ReservationResponse, ReservationSummary,
};
use crate::dto::ApiResponse;
use crate::middleware::rate_limit::FormRateLimiter;
use crate::models::reservation::{
    NewCustomerInfo, NewPricingInfo, NewReservation, NewReservationOptions, NewRouteInfo,
    NewWaypoint, ServiceKind,
};
use crate::repositories::reservation_repository::ReservationRepository;
use crate::services::pricing_service::{PriceEstimate, PricingService};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::sanitize::{find_suspicious_pattern, sanitize_text};
use crate::utils::validation::validate_coordinates;

const FORM_TYPE: &str = "reservation";
const MAX_WAYPOINTS: usize = 5;

pub struct ReservationController {
    repository: ReservationRepository,
    form_limiter: FormRateLimiter,
}

impl ReservationController {
    pub fn new(state: &AppState) -> Self {
        Self {
            repository: ReservationRepository::new(state.pool.clone()),
            form_limiter: state.form_limiter.clone(),
        }
    }

    /// Envío público del formulario de reserva.
    ///
    /// Pipeline: honeypot → patrones de inyección → rate limit →
    /// saneamiento → validación → estimación → insert transaccional.
    pub async fn submit(
        &self,
        client_key: &str,
        request: CreateReservationRequest,
    ) -> Result<ApiResponse<ReservationResponse>, AppError> {
        // Honeypot: responder como aceptado sin persistir, el bot no
        // debe saber que fue detectado
        if !request.website.trim().is_empty() {
            log::warn!(
                "🕵️ Actividad sospechosa: honeypot relleno desde {}",
                client_key
            );
            return Ok(ApiResponse {
                success: true,
                message: Some("Reserva recibida".to_string()),
                data: None,
            });
        }

        // Patrones de inyección en los campos de texto libre
        self.screen_free_text(&request, client_key)?;

        // Rate limit por cliente y tipo de formulario
        if !self.form_limiter.can_submit(FORM_TYPE, client_key).await {
            let retry_after_seconds = self
                .form_limiter
                .retry_after(FORM_TYPE, client_key)
                .await
                .map(|d| d.as_secs().max(1))
                .unwrap_or(1);
            return Err(AppError::RateLimitExceeded {
                retry_after_seconds,
            });
        }

        // Saneamiento de los campos libres antes de validar y persistir
        let mut request = request;
        request.departure_address = sanitize_text(&request.departure_address);
        request.arrival_address = request
            .arrival_address
            .map(|address| sanitize_text(&address))
            .filter(|address| !address.is_empty());
        request.comments = request
            .comments
            .map(|comments| sanitize_text(&comments))
            .filter(|comments| !comments.is_empty());
        request.customer.full_name = sanitize_text(&request.customer.full_name);
        for waypoint in &mut request.waypoints {
            waypoint.address = sanitize_text(&waypoint.address);
        }

        // Validación declarativa + reglas cruzadas
        request.validate()?;
        self.check_cross_field_rules(&request)?;

        // Precio indicativo con las tarifas fijas por categoría
        let estimate = PricingService::estimate(
            request.service_kind,
            request.vehicle_category,
            request.passengers,
            request.duration_hours,
            &request.options,
        );

        let new_reservation = build_new_reservation(request, &estimate);

        let reservation = self.repository.create(new_reservation).await?;

        self.form_limiter
            .record_submission(FORM_TYPE, client_key)
            .await;

        log::info!("📝 Reserva creada: {}", reservation.id);

        Ok(ApiResponse::success_with_message(
            reservation.into(),
            "Reserva creada exitosamente".to_string(),
        ))
    }

    /// Estimación de precio indicativo sin persistencia
    pub fn estimate(&self, request: EstimateRequest) -> Result<PriceEstimateResponse, AppError> {
        request.validate()?;

        let capacity = request.vehicle_category.passenger_capacity();
        if request.passengers > capacity {
            return Err(AppError::BadRequest(format!(
                "El número de pasajeros supera la capacidad de la categoría {} (máximo {})",
                request.vehicle_category.as_str(),
                capacity
            )));
        }

        let estimate = PricingService::estimate(
            request.service_kind,
            request.vehicle_category,
            request.passengers,
            request.duration_hours,
            &request.options,
        );

        Ok(PriceEstimateResponse {
            base_fare: estimate.base_fare,
            passenger_surcharge: estimate.passenger_surcharge,
            options_surcharge: estimate.options_surcharge,
            total: estimate.total,
            currency: "EUR".to_string(),
        })
    }

    /// Listado paginado para el back-office
    pub async fn list(
        &self,
        query: ReservationListQuery,
    ) -> Result<PaginatedResponse<ReservationSummary>, AppError> {
        let page = query.page.unwrap_or(1).max(1);
        let per_page = query.per_page.unwrap_or(20).clamp(1, 100);

        let (rows, total) = self.repository.list_paginated(page, per_page).await?;

        let data = rows
            .into_iter()
            .map(|row| ReservationSummary {
                id: row.id,
                service_kind: row.service_kind,
                vehicle_category: row.vehicle_category,
                departure_address: row.departure_address,
                arrival_address: row.arrival_address,
                pickup_at: row.pickup_at,
                passengers: row.passengers,
                payment_method: row.payment_method,
                estimated_price: row.estimated_price,
                customer_name: row.full_name,
                customer_phone: row.phone,
                customer_email: row.email,
                created_at: row.created_at,
            })
            .collect();

        let total_pages = if total == 0 {
            0
        } else {
            (total + per_page - 1) / per_page
        };

        Ok(PaginatedResponse {
            data,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    pub async fn detail(&self, id: Uuid) -> Result<ReservationDetailResponse, AppError> {
        let detail = self
            .repository
            .find_detail(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        Ok(ReservationDetailResponse {
            reservation: detail.reservation,
            customer: detail.customer,
            options: detail.options,
            route: detail.route,
            pricing: detail.pricing,
            waypoints: detail.waypoints,
        })
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        Ok(())
    }

    fn screen_free_text(
        &self,
        request: &CreateReservationRequest,
        client_key: &str,
    ) -> Result<(), AppError> {
        let mut free_text: Vec<&str> = vec![
            &request.departure_address,
            &request.customer.full_name,
        ];
        if let Some(arrival) = &request.arrival_address {
            free_text.push(arrival);
        }
        if let Some(comments) = &request.comments {
            free_text.push(comments);
        }
        for waypoint in &request.waypoints {
            free_text.push(&waypoint.address);
        }

        for field in free_text {
            if let Some(pattern) = find_suspicious_pattern(field) {
                log::warn!(
                    "🕵️ Actividad sospechosa detectada ({}) desde {}: envío bloqueado",
                    pattern,
                    client_key
                );
                return Err(AppError::BadRequest(
                    "El contenido del formulario no es válido".to_string(),
                ));
            }
        }

        Ok(())
    }

    fn check_cross_field_rules(&self, request: &CreateReservationRequest) -> Result<(), AppError> {
        // Capacidad de la categoría: 3 confort, 8 van
        let capacity = request.vehicle_category.passenger_capacity();
        if request.passengers > capacity {
            return Err(AppError::BadRequest(format!(
                "El número de pasajeros supera la capacidad de la categoría {} (máximo {})",
                request.vehicle_category.as_str(),
                capacity
            )));
        }

        match request.service_kind {
            ServiceKind::Transfer => {
                if request
                    .arrival_address
                    .as_deref()
                    .map_or(true, |address| address.trim().is_empty())
                {
                    return Err(AppError::BadRequest(
                        "Un transfer requiere dirección de llegada".to_string(),
                    ));
                }
                if !request.waypoints.is_empty() {
                    return Err(AppError::BadRequest(
                        "Las paradas intermedias solo aplican a la mise à disposition"
                            .to_string(),
                    ));
                }
            }
            ServiceKind::MiseADisposition => {
                if request.duration_hours.is_none() {
                    return Err(AppError::BadRequest(
                        "La mise à disposition requiere una duración en horas".to_string(),
                    ));
                }
            }
        }

        if request.waypoints.len() > MAX_WAYPOINTS {
            return Err(AppError::BadRequest(format!(
                "Máximo {} paradas intermedias",
                MAX_WAYPOINTS
            )));
        }

        // Coordenadas opcionales, pero válidas cuando llegan
        for coords in [
            request.departure_lat.zip(request.departure_lon),
            request.arrival_lat.zip(request.arrival_lon),
        ]
        .into_iter()
        .flatten()
        {
            validate_coordinates(coords.0, coords.1)
                .map_err(|_| AppError::BadRequest("Coordenadas inválidas".to_string()))?;
        }

        for waypoint in &request.waypoints {
            if let Some(coords) = waypoint.lat.zip(waypoint.lon) {
                validate_coordinates(coords.0, coords.1)
                    .map_err(|_| AppError::BadRequest("Coordenadas inválidas".to_string()))?;
            }
        }

        Ok(())
    }
}

fn build_new_reservation(
    request: CreateReservationRequest,
    estimate: &PriceEstimate,
) -> NewReservation {
    let distance_km = request.route.as_ref().map(|route| route.distance_km);

    let route = request.route.as_ref().map(|route| NewRouteInfo {
        distance_km: route.distance_km,
        duration_minutes: route.duration_minutes,
        geometry: route.geometry.clone(),
    });

    let pricing = NewPricingInfo {
        base_fare: estimate.base_fare,
        passenger_surcharge: estimate.passenger_surcharge,
        options_surcharge: estimate.options_surcharge,
        total: estimate.total,
    };

    let waypoints = request
        .waypoints
        .into_iter()
        .map(|waypoint| NewWaypoint {
            address: waypoint.address,
            lat: waypoint.lat,
            lon: waypoint.lon,
        })
        .collect();

    NewReservation {
        service_kind: request.service_kind,
        vehicle_category: request.vehicle_category.as_str().to_string(),
        departure_address: request.departure_address,
        departure_lat: request.departure_lat,
        departure_lon: request.departure_lon,
        departure_place_id: request.departure_place_id,
        arrival_address: request.arrival_address,
        arrival_lat: request.arrival_lat,
        arrival_lon: request.arrival_lon,
        arrival_place_id: request.arrival_place_id,
        duration_hours: request.duration_hours,
        pickup_at: request.pickup_at,
        passengers: request.passengers,
        baggage: request.baggage,
        payment_method: request.payment_method,
        comments: request.comments,
        estimated_price: Some(estimate.total),
        distance_km,
        customer: NewCustomerInfo {
            full_name: request.customer.full_name,
            phone: request.customer.phone,
            email: request.customer.email,
        },
        options: NewReservationOptions {
            child_seats: request.options.child_seats,
            flowers: request.options.flowers,
            airport_assistance: request.options.airport_assistance,
        },
        route,
        pricing: Some(pricing),
        waypoints,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::reservation_dto::{CustomerInfoRequest, ReservationOptionsRequest};
    use crate::models::reservation::PaymentMethod;
    use crate::models::vehicle::VehicleCategory;
    use chrono::{Duration, Utc};

    fn valid_transfer_request() -> CreateReservationRequest {
        CreateReservationRequest {
            service_kind: ServiceKind::Transfer,
            vehicle_category: VehicleCategory::Confort,
            departure_address: "10 Rue de Rivoli, Paris".to_string(),
            departure_lat: Some(48.8558),
            departure_lon: Some(2.3563),
            departure_place_id: None,
            arrival_address: Some("Aéroport Charles-de-Gaulle (CDG)".to_string()),
            arrival_lat: Some(49.0097),
            arrival_lon: Some(2.5479),
            arrival_place_id: None,
            duration_hours: None,
            pickup_at: Utc::now() + Duration::days(1),
            passengers: 2,
            baggage: 2,
            payment_method: PaymentMethod::PayOnSite,
            comments: None,
            options: ReservationOptionsRequest::default(),
            waypoints: vec![],
            customer: CustomerInfoRequest {
                full_name: "Marie Dupont".to_string(),
                phone: "+33 6 12 34 56 78".to_string(),
                email: "marie.dupont@example.com".to_string(),
            },
            route: None,
            website: String::new(),
        }
    }

    // Las reglas cruzadas y la estimación no tocan la base de datos;
    // el pool lazy nunca llega a conectar
    fn test_controller() -> ReservationController {
        ReservationController {
            repository: ReservationRepository::new(
                sqlx::postgres::PgPoolOptions::new()
                    .connect_lazy("postgres://localhost/unused")
                    .unwrap(),
            ),
            form_limiter: FormRateLimiter::new(5, std::time::Duration::from_secs(60)),
        }
    }

    #[tokio::test]
    async fn test_valid_transfer_passes_cross_field_rules() {
        let controller = test_controller();
        assert!(controller
            .check_cross_field_rules(&valid_transfer_request())
            .is_ok());
    }

    #[tokio::test]
    async fn test_capacity_exceeded_is_rejected() {
        let controller = test_controller();

        let mut request = valid_transfer_request();
        request.passengers = 4; // confort admite 3
        assert!(controller.check_cross_field_rules(&request).is_err());

        request.vehicle_category = VehicleCategory::Van;
        assert!(controller.check_cross_field_rules(&request).is_ok());

        request.passengers = 9; // van admite 8
        assert!(controller.check_cross_field_rules(&request).is_err());
    }

    #[tokio::test]
    async fn test_transfer_requires_arrival_address() {
        let controller = test_controller();

        let mut request = valid_transfer_request();
        request.arrival_address = None;
        assert!(controller.check_cross_field_rules(&request).is_err());
    }

    #[tokio::test]
    async fn test_hourly_requires_duration() {
        let controller = test_controller();

        let mut request = valid_transfer_request();
        request.service_kind = ServiceKind::MiseADisposition;
        request.duration_hours = None;
        assert!(controller.check_cross_field_rules(&request).is_err());

        request.duration_hours = Some(3);
        assert!(controller.check_cross_field_rules(&request).is_ok());
    }

    #[tokio::test]
    async fn test_waypoints_only_for_hourly() {
        let controller = test_controller();

        let mut request = valid_transfer_request();
        request.waypoints = vec![crate::dto::reservation_dto::WaypointRequest {
            address: "Place de la Concorde, Paris".to_string(),
            lat: None,
            lon: None,
        }];
        assert!(controller.check_cross_field_rules(&request).is_err());
    }

    #[tokio::test]
    async fn test_invalid_coordinates_are_rejected() {
        let controller = test_controller();

        let mut request = valid_transfer_request();
        request.departure_lat = Some(95.0);
        assert!(controller.check_cross_field_rules(&request).is_err());
    }

    #[tokio::test]
    async fn test_estimate_matches_documented_formula() {
        let controller = test_controller();

        let estimate = controller
            .estimate(EstimateRequest {
                service_kind: ServiceKind::Transfer,
                vehicle_category: VehicleCategory::Confort,
                passengers: 2,
                duration_hours: None,
                options: ReservationOptionsRequest::default(),
            })
            .unwrap();

        assert_eq!(estimate.total, rust_decimal::Decimal::from(60));
        assert_eq!(estimate.currency, "EUR");
    }

    #[tokio::test]
    async fn test_estimate_rejects_over_capacity() {
        let controller = test_controller();

        let result = controller.estimate(EstimateRequest {
            service_kind: ServiceKind::Transfer,
            vehicle_category: VehicleCategory::Confort,
            passengers: 4,
            duration_hours: None,
            options: ReservationOptionsRequest::default(),
        });

        assert!(result.is_err());
    }
}
