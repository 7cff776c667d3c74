use crate::cache::enums::cache_engine::CacheEngine;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector::CacheConnector;
use crate::cache::structs::cache_connector_memcache::CacheConnectorMemcache;
use crate::cache::structs::cache_connector_redis::CacheConnectorRedis;
use crate::cache::traits::flag_cache::FlagCache;
use crate::config::structs::cache_config::CacheConfig;
use async_trait::async_trait;
use log::info;

impl CacheConnector {
    pub async fn new(config: &CacheConfig) -> Result<CacheConnector, CacheError> {
        let transaction = crate::utils::sentry_tracing::start_trace_transaction("cache_init", "cache");
        let connection_url = format!("{}{}", config.engine.url_scheme(), config.address);
        let result: Result<CacheConnector, CacheError> = match config.engine {
            CacheEngine::redis => {
                match CacheConnectorRedis::connect(&connection_url, &config.prefix).await {
                    Ok(redis_connector) => {
                        info!("[Cache] Connected to Redis at {}", config.address);
                        Ok(CacheConnector {
                            redis: Some(redis_connector),
                            memcache: None,
                            engine: Some(CacheEngine::redis),
                        })
                    }
                    Err(e) => Err(e)
                }
            }
            CacheEngine::memcache => {
                match CacheConnectorMemcache::connect(&connection_url, &config.prefix) {
                    Ok(memcache_connector) => {
                        info!("[Cache] Connected to Memcache at {}", config.address);
                        Ok(CacheConnector {
                            redis: None,
                            memcache: Some(memcache_connector),
                            engine: Some(CacheEngine::memcache),
                        })
                    }
                    Err(e) => Err(e)
                }
            }
        };
        crate::utils::sentry_tracing::finish_trace_transaction(transaction, &result, &[
            ("engine", format!("{:?}", config.engine)),
            ("address", config.address.clone()),
        ]);
        result
    }

    pub fn engine(&self) -> Option<CacheEngine> {
        self.engine
    }

    fn backend(&self) -> Result<&dyn FlagCache, CacheError> {
        match self.engine.as_ref() {
            Some(CacheEngine::redis) => self.redis.as_ref()
                .map(|r| r as &dyn FlagCache)
                .ok_or_else(|| CacheError::ConnectionError("Redis not connected".to_string())),
            Some(CacheEngine::memcache) => self.memcache.as_ref()
                .map(|m| m as &dyn FlagCache)
                .ok_or_else(|| CacheError::ConnectionError("Memcache not connected".to_string())),
            None => Err(CacheError::ConnectionError("No cache engine configured".to_string())),
        }
    }
}

#[async_trait]
impl FlagCache for CacheConnector {
    async fn ping(&self) -> Result<(), CacheError> {
        self.backend()?.ping().await
    }

    async fn get_flag(&self, key: &str) -> Result<Option<bool>, CacheError> {
        self.backend()?.get_flag(key).await
    }

    async fn set_flag(&self, key: &str, value: bool) -> Result<(), CacheError> {
        self.backend()?.set_flag(key, value).await
    }

    async fn invalidate(&self, key: &str) -> Result<(), CacheError> {
        self.backend()?.invalidate(key).await
    }
}
