use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::pricing_controller::PricingController;
use crate::dto::pricing_dto::{CreatePricingRequest, PricingResponse, UpdatePricingRequest};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_pricing_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_pricing))
        .route("/", get(list_pricing))
        .route("/:id", put(update_pricing))
        .route("/:id", delete(delete_pricing))
}

async fn create_pricing(
    State(state): State<AppState>,
    Json(request): Json<CreatePricingRequest>,
) -> Result<Json<ApiResponse<PricingResponse>>, AppError> {
    let controller = PricingController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_pricing(
    State(state): State<AppState>,
) -> Result<Json<Vec<PricingResponse>>, AppError> {
    let controller = PricingController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn update_pricing(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdatePricingRequest>,
) -> Result<Json<ApiResponse<PricingResponse>>, AppError> {
    let controller = PricingController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_pricing(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = PricingController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Tarifa eliminada exitosamente"
    })))
}
