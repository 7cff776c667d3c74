use std::time::{Duration, Instant};
use async_trait::async_trait;
use crate::guard::errors::LeaseError;
use crate::guard::structs::lease_token::LeaseToken;
use crate::guard::structs::memory_lease::MemoryLease;
use crate::guard::traits::lease_backend::LeaseBackend;

impl MemoryLease {
    pub fn new() -> MemoryLease {
        MemoryLease::default()
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.leases.lock().get(key).is_some_and(|(_, expires)| *expires > Instant::now())
    }
}

#[async_trait]
impl LeaseBackend for MemoryLease {
    async fn acquire(&self, key: &str, ttl: Duration) -> Result<Option<LeaseToken>, LeaseError> {
        let now = Instant::now();
        let mut leases = self.leases.lock();
        if let Some((_, expires)) = leases.get(key)
            && *expires > now
        {
            return Ok(None);
        }
        let token = LeaseToken::generate();
        leases.insert(key.to_string(), (token.clone(), now + ttl));
        Ok(Some(token))
    }

    async fn release(&self, key: &str, token: &LeaseToken) -> Result<bool, LeaseError> {
        let mut leases = self.leases.lock();
        match leases.get(key) {
            Some((held, _)) if held == token => {
                leases.remove(key);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn prune(&self) -> usize {
        let now = Instant::now();
        let mut leases = self.leases.lock();
        let before = leases.len();
        leases.retain(|_, (_, expires)| *expires > now);
        before - leases.len()
    }
}
