use std::sync::Arc;
use std::time::Instant;
use ahash::AHashMap;
use parking_lot::Mutex;
use crate::guard::structs::lease_token::LeaseToken;

#[derive(Debug, Clone, Default)]
pub struct MemoryLease {
    pub(crate) leases: Arc<Mutex<AHashMap<String, (LeaseToken, Instant)>>>,
}
