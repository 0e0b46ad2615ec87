use axum::{extract::State, http::HeaderMap, routing::post, Json, Router};

use crate::controllers::contact_controller::ContactController;
use crate::dto::contact_dto::{ContactRequest, ContactResponse};
use crate::dto::ApiResponse;
use crate::middleware::rate_limit::client_ip;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_contact_router() -> Router<AppState> {
    Router::new().route("/", post(submit_contact))
}

async fn submit_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<ContactRequest>,
) -> Result<Json<ApiResponse<ContactResponse>>, AppError> {
    let client_key = client_ip(&headers);
    let controller = ContactController::new(&state);
    let response = controller.submit(&client_key, request).await?;
    Ok(Json(response))
}
