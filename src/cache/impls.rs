/// Engine dispatch for `CacheConnector`.
pub mod cache_connector;

/// `FlagCache` for Redis.
pub mod cache_connector_redis;

/// `FlagCache` for Memcache.
pub mod cache_connector_memcache;

/// Display and URL helpers for `CacheEngine`.
pub mod cache_engine;

/// `FlagCache` for the in-process map.
pub mod memory_flag_cache;
