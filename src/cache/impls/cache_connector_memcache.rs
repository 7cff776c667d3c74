use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector_memcache::CacheConnectorMemcache;
use crate::cache::traits::flag_cache::FlagCache;
use async_trait::async_trait;
use log::debug;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

impl fmt::Debug for CacheConnectorMemcache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheConnectorMemcache")
            .field("client", &"<memcache::Client>")
            .field("prefix", &self.prefix)
            .finish()
    }
}

impl CacheConnectorMemcache {
    pub fn connect(url: &str, prefix: &str) -> Result<Self, CacheError> {
        let client = memcache::connect(url)
            .map_err(|e| CacheError::ConnectionError(format!("Failed to connect to Memcache: {}", e)))?;
        Ok(Self {
            client: Arc::new(Mutex::new(client)),
            prefix: prefix.to_string(),
        })
    }

    fn flag_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

#[async_trait]
impl FlagCache for CacheConnectorMemcache {
    async fn ping(&self) -> Result<(), CacheError> {
        let client = self.client.lock();
        client.version()
            .map_err(CacheError::MemcacheError)?;
        Ok(())
    }

    async fn get_flag(&self, key: &str) -> Result<Option<bool>, CacheError> {
        let client = self.client.lock();
        let value: Option<String> = client.get(&self.flag_key(key))
            .map_err(CacheError::MemcacheError)?;
        Ok(value.map(|v| v == "1"))
    }

    async fn set_flag(&self, key: &str, value: bool) -> Result<(), CacheError> {
        let client = self.client.lock();
        client.set(&self.flag_key(key), if value { "1" } else { "0" }, 0)
            .map_err(CacheError::MemcacheError)?;
        debug!("[Memcache] Set flag {}={}", key, value);
        Ok(())
    }

    async fn invalidate(&self, key: &str) -> Result<(), CacheError> {
        let client = self.client.lock();
        client.delete(&self.flag_key(key))
            .map_err(CacheError::MemcacheError)?;
        debug!("[Memcache] Invalidated flag {}", key);
        Ok(())
    }
}
