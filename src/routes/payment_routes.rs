use axum::{extract::State, routing::post, Json, Router};
use validator::Validate;

use crate::dto::payment_dto::{CreatePaymentIntentRequest, CreatePaymentIntentResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_payment_router() -> Router<AppState> {
    Router::new().route("/api/create-payment-intent", post(create_payment_intent))
}

async fn create_payment_intent(
    State(state): State<AppState>,
    Json(request): Json<CreatePaymentIntentRequest>,
) -> Result<Json<CreatePaymentIntentResponse>, AppError> {
    request.validate()?;

    let response = state.payments.create_payment_intent(request.amount).await?;
    Ok(Json(response))
}
