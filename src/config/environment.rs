//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub jwt_secret: String,
    pub jwt_expiration: u64,
    pub cors_origins: Vec<String>,
    pub rate_limit_requests: u32,
    pub rate_limit_window: u64,
    /// Máximo de envíos de formulario por cliente dentro de la ventana
    pub form_rate_limit_max: usize,
    /// Ventana deslizante del rate limit de formularios, en segundos
    pub form_rate_limit_window: u64,
    /// Proveedor de autocompletado por defecto: "mapbox" o "nominatim"
    pub address_provider: String,
    pub mapbox_token: Option<String>,
    pub nominatim_url: String,
    pub osrm_url: String,
    pub stripe_secret_key: String,
    pub address_cache_ttl: u64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").expect("ENVIRONMENT must be set"),
            port: env::var("PORT")
                .expect("PORT must be set")
                .parse()
                .expect("PORT must be a valid number"),
            host: env::var("HOST").expect("HOST must be set"),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            jwt_expiration: env::var("JWT_EXPIRATION")
                .expect("JWT_EXPIRATION must be set")
                .parse()
                .expect("JWT_EXPIRATION must be a valid number"),
            cors_origins: env::var("CORS_ORIGINS")
                .expect("CORS_ORIGINS must be set")
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
            rate_limit_requests: env::var("RATE_LIMIT_REQUESTS")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .expect("RATE_LIMIT_REQUESTS must be a valid number"),
            rate_limit_window: env::var("RATE_LIMIT_WINDOW")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .expect("RATE_LIMIT_WINDOW must be a valid number"),
            form_rate_limit_max: env::var("FORM_RATE_LIMIT_MAX")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .expect("FORM_RATE_LIMIT_MAX must be a valid number"),
            form_rate_limit_window: env::var("FORM_RATE_LIMIT_WINDOW")
                .unwrap_or_else(|_| "3600".to_string())
                .parse()
                .expect("FORM_RATE_LIMIT_WINDOW must be a valid number"),
            address_provider: env::var("ADDRESS_PROVIDER")
                .unwrap_or_else(|_| "nominatim".to_string()),
            mapbox_token: env::var("MAPBOX_TOKEN").ok(),
            nominatim_url: env::var("NOMINATIM_URL")
                .unwrap_or_else(|_| "https://nominatim.openstreetmap.org".to_string()),
            osrm_url: env::var("OSRM_URL")
                .unwrap_or_else(|_| "https://router.project-osrm.org".to_string()),
            stripe_secret_key: env::var("STRIPE_SECRET_KEY")
                .expect("STRIPE_SECRET_KEY must be set"),
            address_cache_ttl: env::var("ADDRESS_CACHE_TTL")
                .unwrap_or_else(|_| "86400".to_string())
                .parse()
                .expect("ADDRESS_CACHE_TTL must be a valid number"),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
