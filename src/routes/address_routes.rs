use axum::{extract::{Query, State}, routing::get, Json, Router};

use crate::dto::address_dto::{AddressSearchParams, AddressSearchResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_address_router() -> Router<AppState> {
    Router::new().route("/search", get(search_addresses))
}

/// Autocompletado de direcciones. Los fallos del proveedor degradan a un
/// mensaje transitorio (success=false), no a un error HTTP: el siguiente
/// keystroke del cliente relanza la búsqueda.
async fn search_addresses(
    State(state): State<AppState>,
    Query(params): Query<AddressSearchParams>,
) -> Result<Json<AddressSearchResponse>, AppError> {
    match state
        .address_search
        .search(&params.q, params.provider.as_deref())
        .await
    {
        Ok(suggestions) => Ok(Json(AddressSearchResponse {
            success: true,
            suggestions,
            error: None,
        })),
        Err(AppError::ExternalApi(message)) => {
            log::warn!("⚠️ Autocompletado no disponible: {}", message);
            Ok(Json(AddressSearchResponse {
                success: false,
                suggestions: vec![],
                error: Some("Servicio de direcciones no disponible".to_string()),
            }))
        }
        Err(e) => Err(e),
    }
}
