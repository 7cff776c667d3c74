use std::net::IpAddr;
use async_trait::async_trait;

#[async_trait]
pub trait ConnectableCheck: Send + Sync {
    async fn is_connectable(&self, ip: Option<IpAddr>, port: u16, agent: &str) -> bool;

    /// Drops memoized answers that are out of date, returning how many were removed.
    fn prune(&self) -> usize {
        0
    }
}
