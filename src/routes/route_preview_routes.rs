use axum::{extract::{Query, State}, routing::get, Json, Router};

use crate::dto::route_dto::{RoutePreviewParams, RoutePreviewResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_coordinates;

pub fn create_route_preview_router() -> Router<AppState> {
    Router::new().route("/preview", get(route_preview))
}

/// Preview de ruta entre dos puntos geocodificados. Siempre responde 200;
/// el fallo del servicio de routing degrada a success=false.
async fn route_preview(
    State(state): State<AppState>,
    Query(params): Query<RoutePreviewParams>,
) -> Result<Json<RoutePreviewResponse>, AppError> {
    validate_coordinates(params.from_lat, params.from_lon)
        .and_then(|_| validate_coordinates(params.to_lat, params.to_lon))
        .map_err(|_| AppError::BadRequest("Coordenadas inválidas".to_string()))?;

    let preview = state
        .routing
        .preview(params.from_lat, params.from_lon, params.to_lat, params.to_lon)
        .await;

    Ok(Json(preview))
}
