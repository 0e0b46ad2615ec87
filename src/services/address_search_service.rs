//! Autocompletado de direcciones
//!
//! Dos integraciones intercambiables detrás de un mismo contrato:
//! el geocoder de Mapbox y el de datos abiertos (Nominatim). El proveedor
//! primario se elige por configuración y el otro actúa de redundancia.

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::cache::{CacheOperations, RedisClient};
use crate::config::environment::EnvironmentConfig;
use crate::dto::address_dto::AddressSuggestion;
use crate::services::mapbox_geocoding::MapboxAddressProvider;
use crate::services::nominatim_geocoding::NominatimAddressProvider;
use crate::utils::errors::{AppError, AppResult};

/// Longitud mínima de la query (el cliente ya hace debounce ~500ms)
pub const MIN_QUERY_LEN: usize = 3;

/// Máximo de sugerencias devueltas
pub const RESULT_LIMIT: usize = 5;

/// Contrato común de los proveedores de autocompletado
#[async_trait]
pub trait AddressProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Buscar direcciones candidatas para una query de texto libre
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<AddressSuggestion>>;
}

/// Servicio de búsqueda con proveedor primario, redundancia y caché
pub struct AddressSearchService {
    primary: Box<dyn AddressProvider>,
    fallback: Option<Box<dyn AddressProvider>>,
    redis: RedisClient,
    cache_ttl: u64,
}

impl AddressSearchService {
    /// Construir el servicio desde la configuración. Falla al arranque si
    /// el proveedor configurado no puede crearse (sin token, por ejemplo).
    pub fn from_config(config: &EnvironmentConfig, redis: RedisClient) -> Result<Self> {
        let (primary, fallback): (Box<dyn AddressProvider>, Option<Box<dyn AddressProvider>>) =
            match config.address_provider.as_str() {
                "mapbox" => {
                    let token = config.mapbox_token.clone().ok_or_else(|| {
                        anyhow!("MAPBOX_TOKEN requerido cuando ADDRESS_PROVIDER=mapbox")
                    })?;
                    (
                        Box::new(MapboxAddressProvider::new(token)),
                        Some(Box::new(NominatimAddressProvider::new(
                            config.nominatim_url.clone(),
                        ))),
                    )
                }
                "nominatim" => {
                    let fallback = config.mapbox_token.clone().map(|token| {
                        Box::new(MapboxAddressProvider::new(token)) as Box<dyn AddressProvider>
                    });
                    (
                        Box::new(NominatimAddressProvider::new(config.nominatim_url.clone())),
                        fallback,
                    )
                }
                other => {
                    return Err(anyhow!("Proveedor de direcciones desconocido: {}", other))
                }
            };

        Ok(Self {
            primary,
            fallback,
            redis,
            cache_ttl: config.address_cache_ttl,
        })
    }

    /// Buscar sugerencias. Con `provider_override` se fuerza un proveedor
    /// concreto; si no, primario con fallback al secundario cuando el
    /// primario falla o no devuelve nada.
    pub async fn search(
        &self,
        query: &str,
        provider_override: Option<&str>,
    ) -> AppResult<Vec<AddressSuggestion>> {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_LEN {
            return Err(AppError::BadRequest(format!(
                "La búsqueda requiere al menos {} caracteres",
                MIN_QUERY_LEN
            )));
        }

        if let Some(name) = provider_override {
            let provider = self.provider_by_name(name).ok_or_else(|| {
                AppError::BadRequest(format!("Proveedor desconocido: {}", name))
            })?;
            return self.search_with(provider, query).await;
        }

        match self.search_with(self.primary.as_ref(), query).await {
            Ok(results) if !results.is_empty() => Ok(results),
            primary_result => match &self.fallback {
                Some(fallback) => {
                    log::warn!(
                        "⚠️ Proveedor primario '{}' sin resultados, intentando '{}'",
                        self.primary.name(),
                        fallback.name()
                    );
                    self.search_with(fallback.as_ref(), query).await
                }
                None => primary_result,
            },
        }
    }

    fn provider_by_name(&self, name: &str) -> Option<&dyn AddressProvider> {
        if self.primary.name() == name {
            return Some(self.primary.as_ref());
        }
        match &self.fallback {
            Some(fallback) if fallback.name() == name => Some(fallback.as_ref()),
            _ => None,
        }
    }

    async fn search_with(
        &self,
        provider: &dyn AddressProvider,
        query: &str,
    ) -> AppResult<Vec<AddressSuggestion>> {
        let cache_key = self.redis.address_key(provider.name(), query);

        if let Ok(Some(cached)) = self.redis.get::<Vec<AddressSuggestion>>(&cache_key).await {
            return Ok(cached);
        }

        let results = provider
            .search(query, RESULT_LIMIT)
            .await
            .map_err(|e| AppError::ExternalApi(format!("{}: {}", provider.name(), e)))?;

        if !results.is_empty() {
            let _ = self.redis.set(&cache_key, &results, self.cache_ttl).await;
        }

        Ok(results)
    }
}
