use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use log::{debug, warn};
use crate::announce::enums::announce_error::AnnounceError;
use crate::guard::structs::serialization_guard::SerializationGuard;
use crate::guard::traits::lease_backend::LeaseBackend;

impl SerializationGuard {
    pub fn new(backend: Arc<dyn LeaseBackend>, ttl: Duration) -> SerializationGuard {
        SerializationGuard { backend, ttl }
    }

    pub fn lease_key(user_id: u64, torrent_id: u64) -> String {
        format!("announce:{}:{}", user_id, torrent_id)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn prune(&self) -> usize {
        self.backend.prune()
    }

    /// Runs `work` while holding the (user, torrent) lease.
    ///
    /// The lease is released whether `work` succeeds or fails. A failed release
    /// is logged and left to expire.
    pub async fn run<T, F, Fut>(&self, user_id: u64, torrent_id: u64, work: F) -> Result<T, AnnounceError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, AnnounceError>>,
    {
        let key = SerializationGuard::lease_key(user_id, torrent_id);
        let token = match self.backend.acquire(&key, self.ttl).await? {
            Some(token) => token,
            None => {
                debug!("[GUARD] Lease {} is busy", key);
                return Err(AnnounceError::Contention(key));
            }
        };
        let result = work().await;
        match self.backend.release(&key, &token).await {
            Ok(true) => {}
            Ok(false) => warn!("[GUARD] Lease {} expired before release", key),
            Err(e) => warn!("[GUARD] Unable to release lease {}: {}", key, e),
        }
        result
    }
}
