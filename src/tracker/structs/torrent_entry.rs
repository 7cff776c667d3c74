//! Torrent swarm aggregate.

use serde::{Deserialize, Serialize};

/// A torrent as loaded for one announce.
///
/// # Promotions
///
/// - `free` is the percentage of downloaded bytes exempted from credit, on an
///   inverted scale: 100 means fully exempt, 0 means fully counted. Values
///   outside `[0, 100]` are clamped before use.
/// - `doubleup` credits uploaded bytes twice.
///
/// Peer rows are not carried here. They are read from the peer repository
/// once the announce holds its lease.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct TorrentEntry {
    pub id: u64,
    pub seeders: i64,
    pub leechers: i64,
    pub times_completed: u64,
    pub free: i64,
    pub doubleup: bool,
}
