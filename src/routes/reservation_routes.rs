use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    routing::{delete, get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::reservation_controller::ReservationController;
use crate::dto::reservation_dto::{
    CreateReservationRequest, EstimateRequest, PaginatedResponse, PriceEstimateResponse,
    ReservationDetailResponse, ReservationListQuery, ReservationResponse, ReservationSummary,
};
use crate::dto::ApiResponse;
use crate::middleware::rate_limit::client_ip;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rutas públicas del formulario de reserva
pub fn create_reservation_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_reservation))
        .route("/estimate", post(estimate_price))
}

/// Rutas del back-office (detrás del middleware de auth)
pub fn create_admin_reservation_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_reservations))
        .route("/:id", get(get_reservation))
        .route("/:id", delete(delete_reservation))
}

async fn create_reservation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<CreateReservationRequest>,
) -> Result<Json<ApiResponse<ReservationResponse>>, AppError> {
    let client_key = client_ip(&headers);
    let controller = ReservationController::new(&state);
    let response = controller.submit(&client_key, request).await?;
    Ok(Json(response))
}

async fn estimate_price(
    State(state): State<AppState>,
    Json(request): Json<EstimateRequest>,
) -> Result<Json<PriceEstimateResponse>, AppError> {
    let controller = ReservationController::new(&state);
    let response = controller.estimate(request)?;
    Ok(Json(response))
}

async fn list_reservations(
    State(state): State<AppState>,
    Query(query): Query<ReservationListQuery>,
) -> Result<Json<PaginatedResponse<ReservationSummary>>, AppError> {
    let controller = ReservationController::new(&state);
    let response = controller.list(query).await?;
    Ok(Json(response))
}

async fn get_reservation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReservationDetailResponse>, AppError> {
    let controller = ReservationController::new(&state);
    let response = controller.detail(id).await?;
    Ok(Json(response))
}

async fn delete_reservation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ReservationController::new(&state);
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Reserva eliminada exitosamente"
    })))
}
