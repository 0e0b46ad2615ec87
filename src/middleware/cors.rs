//! Middleware de CORS
//!
//! Permisivo cuando la configuración incluye "*", restringido a los
//! orígenes configurados en caso contrario.

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::CorsLayer;

/// Crear middleware de CORS a partir de la lista de orígenes configurada
pub fn cors_middleware(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|origin| origin == "*") {
        // NOTA: permite cualquier origen - solo para desarrollo
        return CorsLayer::very_permissive();
    }

    let mut cors = CorsLayer::new();

    for origin in origins {
        if let Ok(header_value) = HeaderValue::from_str(origin) {
            cors = cors.allow_origin(header_value);
        }
    }

    cors.allow_methods([
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ])
    .allow_headers([
        HeaderName::from_static("authorization"),
        HeaderName::from_static("content-type"),
        HeaderName::from_static("accept"),
        HeaderName::from_static("origin"),
        HeaderName::from_static("x-requested-with"),
    ])
    .allow_credentials(true)
    .max_age(std::time::Duration::from_secs(3600))
}
