//! Cliente Redis
//!
//! Caché de resultados de búsqueda de direcciones con TTL.

use anyhow::Result;
use redis::{aio::ConnectionManager, AsyncCommands, RedisResult};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info, warn};

use super::CacheConfig;

/// Operaciones de cache
#[async_trait::async_trait]
pub trait CacheOperations {
    async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>>;
    async fn set<T: Serialize + Send + Sync>(&self, key: &str, value: &T, ttl: u64) -> Result<()>;
    async fn delete(&self, key: &str) -> Result<()>;
}

/// Cliente Redis con connection pooling y operaciones async
#[derive(Clone)]
pub struct RedisClient {
    manager: ConnectionManager,
    config: CacheConfig,
}

impl RedisClient {
    /// Crear nuevo cliente Redis
    pub async fn new(config: CacheConfig) -> Result<Self> {
        info!("🔗 Conectando a Redis: {}", config.redis_url);

        let client = redis::Client::open(config.redis_url.clone())?;
        let manager = ConnectionManager::new(client).await?;

        // Test de conexión usando un comando simple
        let mut conn = manager.clone();
        let _: () = redis::cmd("PING").query_async(&mut conn).await?;

        Ok(Self { manager, config })
    }

    /// TTL por defecto configurado
    pub fn default_ttl(&self) -> u64 {
        self.config.default_ttl
    }

    /// Generar clave de cache con prefijo
    fn make_key(&self, prefix: &str, identifier: &str) -> String {
        format!("vtc_booking:{}:{}", prefix, identifier)
    }

    /// Clave de caché de búsqueda de direcciones.
    /// La query es texto libre, se usa md5 para una clave determinista.
    pub fn address_key(&self, provider: &str, query: &str) -> String {
        let digest = format!("{:x}", md5::compute(query.trim().to_lowercase().as_bytes()));
        self.make_key("address", &format!("{}:{}", provider, digest))
    }
}

#[async_trait::async_trait]
impl CacheOperations for RedisClient {
    async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let mut conn = self.manager.clone();

        match conn.get::<_, Option<String>>(key).await {
            Ok(Some(value)) => {
                debug!("📥 Cache HIT para clave: {}", key);
                let deserialized: T = serde_json::from_str(&value)?;
                Ok(Some(deserialized))
            }
            Ok(None) => {
                debug!("❌ Cache MISS para clave: {}", key);
                Ok(None)
            }
            Err(e) => {
                warn!("⚠️ Error leyendo cache para clave {}: {}", key, e);
                Ok(None)
            }
        }
    }

    async fn set<T: Serialize + Send + Sync>(&self, key: &str, value: &T, ttl: u64) -> Result<()> {
        let mut conn = self.manager.clone();

        let serialized = serde_json::to_string(value)?;

        let result: RedisResult<()> = conn.set_ex(key, serialized, ttl).await;
        if let Err(e) = result {
            warn!("⚠️ Error escribiendo cache para clave {}: {}", key, e);
        }

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut conn = self.manager.clone();
        let result: RedisResult<()> = conn.del(key).await;
        if let Err(e) = result {
            warn!("⚠️ Error eliminando clave de cache {}: {}", key, e);
        }
        Ok(())
    }
}
