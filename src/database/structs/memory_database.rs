use std::sync::Arc;
use ahash::{AHashMap, AHashSet};
use parking_lot::RwLock;
use crate::peer::structs::peer::Peer;
use crate::peer::structs::peer_id::PeerId;
use crate::tracker::structs::user_entry::UserEntry;

/// Swarm counters of one torrent row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TorrentTotals {
    pub seeders: i64,
    pub leechers: i64,
    pub times_completed: u64,
}

/// Identity of a peer row.
pub type PeerKey = (PeerId, u64, u64);

#[derive(Debug, Clone, Default)]
pub struct MemoryDatabase {
    pub(crate) users: Arc<RwLock<AHashMap<u64, UserEntry>>>,
    pub(crate) torrents: Arc<RwLock<AHashMap<u64, TorrentTotals>>>,
    pub(crate) peers: Arc<RwLock<AHashMap<PeerKey, Peer>>>,
    pub(crate) personal_freeleech: Arc<RwLock<AHashSet<u64>>>,
    pub(crate) freeleech_tokens: Arc<RwLock<AHashSet<(u64, u64)>>>,
}
