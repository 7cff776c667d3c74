use async_trait::async_trait;
use crate::cache::errors::CacheError;

#[async_trait]
pub trait FlagCache: Send + Sync {
    async fn ping(&self) -> Result<(), CacheError>;

    async fn get_flag(&self, key: &str) -> Result<Option<bool>, CacheError>;

    async fn set_flag(&self, key: &str, value: bool) -> Result<(), CacheError>;

    async fn invalidate(&self, key: &str) -> Result<(), CacheError>;
}
