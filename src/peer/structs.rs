/// Opaque peer identifier sent by BitTorrent clients.
pub mod peer_id;

/// Stored peer record of one `(peer_id, user_id, torrent_id)` triple.
pub mod peer;

/// Result of resolving an announce against the previous peer record.
pub mod peer_state;

/// Reachability check answering a fixed value.
pub mod static_connectable_check;

/// Reachability check connecting to the peer over TCP.
pub mod tcp_connectable_check;
