use std::net::IpAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use ahash::AHashMap;
use parking_lot::RwLock;

/// Key of a memoized reachability answer.
pub type ConnectableKey = (IpAddr, u16, String);

#[derive(Debug, Clone)]
pub struct TcpConnectableCheck {
    pub(crate) timeout: Duration,
    pub(crate) interval: Duration,
    pub(crate) results: Arc<RwLock<AHashMap<ConnectableKey, (Instant, bool)>>>,
}
