use std::sync::Arc;
use std::time::Duration;
use crate::guard::traits::lease_backend::LeaseBackend;

#[derive(Clone)]
pub struct SerializationGuard {
    pub(crate) backend: Arc<dyn LeaseBackend>,
    pub(crate) ttl: Duration,
}
