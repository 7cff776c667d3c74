use std::net::IpAddr;
use async_trait::async_trait;
use crate::peer::structs::static_connectable_check::StaticConnectableCheck;
use crate::peer::traits::connectable_check::ConnectableCheck;

impl StaticConnectableCheck {
    pub fn new(connectable: bool) -> StaticConnectableCheck {
        StaticConnectableCheck { connectable }
    }
}

#[async_trait]
impl ConnectableCheck for StaticConnectableCheck {
    async fn is_connectable(&self, _ip: Option<IpAddr>, _port: u16, _agent: &str) -> bool {
        self.connectable
    }
}
