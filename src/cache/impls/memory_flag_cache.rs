use async_trait::async_trait;
use crate::cache::errors::CacheError;
use crate::cache::structs::memory_flag_cache::MemoryFlagCache;
use crate::cache::traits::flag_cache::FlagCache;

impl MemoryFlagCache {
    pub fn new() -> MemoryFlagCache {
        MemoryFlagCache::default()
    }

    pub fn len(&self) -> usize {
        self.flags.read_recursive().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl FlagCache for MemoryFlagCache {
    async fn ping(&self) -> Result<(), CacheError> {
        Ok(())
    }

    async fn get_flag(&self, key: &str) -> Result<Option<bool>, CacheError> {
        Ok(self.flags.read_recursive().get(key).copied())
    }

    async fn set_flag(&self, key: &str, value: bool) -> Result<(), CacheError> {
        self.flags.write().insert(key.to_string(), value);
        Ok(())
    }

    async fn invalidate(&self, key: &str) -> Result<(), CacheError> {
        self.flags.write().remove(key);
        Ok(())
    }
}
