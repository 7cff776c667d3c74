use std::time::Duration;
use async_trait::async_trait;
use crate::guard::errors::LeaseError;
use crate::guard::structs::lease_token::LeaseToken;

#[async_trait]
pub trait LeaseBackend: Send + Sync {
    /// Returns `None` while someone else holds an unexpired lease on `key`.
    async fn acquire(&self, key: &str, ttl: Duration) -> Result<Option<LeaseToken>, LeaseError>;

    /// Only the holder of `token` can release; returns whether a lease was removed.
    async fn release(&self, key: &str, token: &LeaseToken) -> Result<bool, LeaseError>;

    /// Drops expired leases kept in process. Backends that expire keys themselves keep the default.
    fn prune(&self) -> usize {
        0
    }
}
