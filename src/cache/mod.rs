//! Cache
//!
//! Este módulo contiene el sistema de caché Redis usado para
//! los resultados de búsqueda de direcciones.

pub mod cache_config;
pub mod redis_client;

pub use cache_config::CacheConfig;
pub use redis_client::{CacheOperations, RedisClient};
