//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Todos los clientes externos (geocoding,
//! routing, pago, JWT) se construyen aquí una sola vez desde la
//! configuración y se inyectan; no hay singletons ocultos.

use anyhow::Result;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::redis_client::RedisClient;
use crate::config::environment::EnvironmentConfig;
use crate::middleware::rate_limit::{FormRateLimiter, RateLimitState};
use crate::services::address_search_service::AddressSearchService;
use crate::services::jwt_service::{JwtConfig, JwtService};
use crate::services::payment_service::PaymentService;
use crate::services::routing_service::RoutingService;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub redis: RedisClient,
    pub jwt: Arc<JwtService>,
    pub address_search: Arc<AddressSearchService>,
    pub routing: Arc<RoutingService>,
    pub payments: Arc<PaymentService>,
    pub form_limiter: FormRateLimiter,
    pub api_limiter: RateLimitState,
}

impl AppState {
    /// Construir el estado completo. Falla al arranque si algún servicio
    /// no puede inicializarse con la configuración dada.
    pub fn new(pool: PgPool, config: EnvironmentConfig, redis: RedisClient) -> Result<Self> {
        let jwt = Arc::new(JwtService::new(JwtConfig::from_environment(&config)));
        let address_search = Arc::new(AddressSearchService::from_config(&config, redis.clone())?);
        let routing = Arc::new(RoutingService::new(config.osrm_url.clone()));
        let payments = Arc::new(PaymentService::new(config.stripe_secret_key.clone()));
        let form_limiter = FormRateLimiter::new(
            config.form_rate_limit_max,
            Duration::from_secs(config.form_rate_limit_window),
        );
        let api_limiter = RateLimitState::new(&config);

        Ok(Self {
            pool,
            config,
            redis,
            jwt,
            address_search,
            routing,
            payments,
            form_limiter,
            api_limiter,
        })
    }
}
