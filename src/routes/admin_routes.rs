use axum::{
    extract::State,
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{AdminLoginRequest, AdminLoginResponse, VerifyResponse};
use crate::dto::ApiResponse;
use crate::middleware::auth::auth_middleware;
use crate::models::admin_user::AuthenticatedAdmin;
use crate::routes::{pricing_routes, reservation_routes, vehicle_routes};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_admin_router(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/verify", get(verify_token))
        .nest("/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/pricing", pricing_routes::create_pricing_router())
        .nest(
            "/reservations",
            reservation_routes::create_admin_reservation_router(),
        )
        .layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new().route("/auth", post(login)).merge(protected)
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<AdminLoginRequest>,
) -> Result<Json<ApiResponse<AdminLoginResponse>>, AppError> {
    let controller = AuthController::new(state.pool.clone(), state.jwt.clone());
    let response = controller.login(request).await?;
    Ok(Json(response))
}

/// El middleware ya validó firma, expiración y existencia del admin;
/// si llegamos aquí el token es válido.
async fn verify_token(Extension(admin): Extension<AuthenticatedAdmin>) -> Json<VerifyResponse> {
    Json(VerifyResponse {
        valid: true,
        username: admin.username,
    })
}
