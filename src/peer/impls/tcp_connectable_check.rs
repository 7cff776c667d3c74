use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::{Duration, Instant};
use ahash::AHashMap;
use async_trait::async_trait;
use log::debug;
use parking_lot::RwLock;
use tokio::net::TcpStream;
use crate::peer::structs::tcp_connectable_check::TcpConnectableCheck;
use crate::peer::traits::connectable_check::ConnectableCheck;

impl TcpConnectableCheck {
    pub fn new(timeout: Duration, interval: Duration) -> TcpConnectableCheck {
        TcpConnectableCheck {
            timeout,
            interval,
            results: Arc::new(RwLock::new(AHashMap::new())),
        }
    }

    fn cached(&self, key: &(IpAddr, u16, String)) -> Option<bool> {
        let lock = self.results.read_recursive();
        lock.get(key)
            .filter(|(checked, _)| checked.elapsed() < self.interval)
            .map(|(_, connectable)| *connectable)
    }

    async fn probe(&self, addr: SocketAddr) -> bool {
        matches!(tokio::time::timeout(self.timeout, TcpStream::connect(addr)).await, Ok(Ok(_)))
    }
}

#[async_trait]
impl ConnectableCheck for TcpConnectableCheck {
    async fn is_connectable(&self, ip: Option<IpAddr>, port: u16, agent: &str) -> bool {
        let Some(ip) = ip else {
            return false;
        };
        let key = (ip, port, agent.to_string());
        if let Some(connectable) = self.cached(&key) {
            return connectable;
        }
        let connectable = self.probe(SocketAddr::new(ip, port)).await;
        debug!("[CONNECTABLE] {}:{} connectable={}", ip, port, connectable);
        self.results.write().insert(key, (Instant::now(), connectable));
        connectable
    }

    fn prune(&self) -> usize {
        let mut lock = self.results.write();
        let before = lock.len();
        lock.retain(|_, (checked, _)| checked.elapsed() < self.interval);
        before - lock.len()
    }
}
