//! Routers de la API
//!
//! Un router por recurso, anidados bajo /api en el router principal.

pub mod address_routes;
pub mod admin_routes;
pub mod contact_routes;
pub mod payment_routes;
pub mod pricing_routes;
pub mod reservation_routes;
pub mod route_preview_routes;
pub mod vehicle_routes;

use axum::{middleware, Router};

use crate::middleware::cors::cors_middleware;
use crate::middleware::rate_limit::rate_limit_middleware;
use crate::state::AppState;

/// Crear el router principal de la API
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/admin", admin_routes::create_admin_router(state.clone()))
        .nest(
            "/api/reservations",
            reservation_routes::create_reservation_router(),
        )
        .nest("/api/contact", contact_routes::create_contact_router())
        .nest(
            "/api/address",
            address_routes::create_address_router().layer(middleware::from_fn_with_state(
                state.api_limiter.clone(),
                rate_limit_middleware,
            )),
        )
        .nest(
            "/api/route",
            route_preview_routes::create_route_preview_router(),
        )
        .merge(payment_routes::create_payment_router())
        .layer(cors_middleware(&state.config.cors_origins))
        .with_state(state)
}
