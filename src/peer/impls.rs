/// Display and conversions for `PeerId`.
pub mod peer_id;

/// Identity matching for `Peer`.
pub mod peer;

/// Resolution of `PeerState`.
pub mod peer_state;

/// `ConnectableCheck` for `StaticConnectableCheck`.
pub mod static_connectable_check;

/// `ConnectableCheck` for `TcpConnectableCheck`.
pub mod tcp_connectable_check;
