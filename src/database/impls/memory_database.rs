use crate::database::errors::DatabaseError;
use crate::database::structs::memory_database::{MemoryDatabase, TorrentTotals};
use crate::database::traits::freeleech_repository::FreeleechRepository;
use crate::database::traits::peer_repository::PeerRepository;
use crate::database::traits::torrent_repository::TorrentRepository;
use crate::database::traits::user_repository::UserRepository;
use crate::tracker::structs::user_entry::UserEntry;
use crate::peer::structs::peer::Peer;
use crate::peer::structs::peer_id::PeerId;
use async_trait::async_trait;

impl MemoryDatabase {
    pub fn new() -> MemoryDatabase {
        MemoryDatabase::default()
    }

    pub fn insert_user(&self, user: UserEntry) {
        self.users.write().insert(user.id, user);
    }

    pub fn get_user(&self, user_id: u64) -> Option<UserEntry> {
        self.users.read_recursive().get(&user_id).cloned()
    }

    pub fn insert_torrent(&self, torrent_id: u64, totals: TorrentTotals) {
        self.torrents.write().insert(torrent_id, totals);
    }

    pub fn get_torrent(&self, torrent_id: u64) -> Option<TorrentTotals> {
        self.torrents.read_recursive().get(&torrent_id).copied()
    }

    pub fn insert_peer(&self, peer: Peer) {
        self.peers.write().insert((peer.peer_id.clone(), peer.user_id, peer.torrent_id), peer);
    }

    pub fn get_peer(&self, peer_id: &PeerId, user_id: u64, torrent_id: u64) -> Option<Peer> {
        self.peers.read_recursive().get(&(peer_id.clone(), user_id, torrent_id)).cloned()
    }

    pub fn peer_count(&self) -> usize {
        self.peers.read_recursive().len()
    }

    pub fn grant_personal_freeleech(&self, user_id: u64) {
        self.personal_freeleech.write().insert(user_id);
    }

    pub fn revoke_personal_freeleech(&self, user_id: u64) -> bool {
        self.personal_freeleech.write().remove(&user_id)
    }

    pub fn grant_freeleech_token(&self, user_id: u64, torrent_id: u64) {
        self.freeleech_tokens.write().insert((user_id, torrent_id));
    }

    pub fn revoke_freeleech_token(&self, user_id: u64, torrent_id: u64) -> bool {
        self.freeleech_tokens.write().remove(&(user_id, torrent_id))
    }
}

// Rows that do not exist are left alone, like an UPDATE matching nothing.
#[async_trait]
impl UserRepository for MemoryDatabase {
    async fn increment_aggregates(&self, user_id: u64, uploaded: u64, downloaded: u64) -> Result<(), DatabaseError> {
        if let Some(user) = self.users.write().get_mut(&user_id) {
            user.uploaded = user.uploaded.saturating_add(uploaded);
            user.downloaded = user.downloaded.saturating_add(downloaded);
        }
        Ok(())
    }
}

#[async_trait]
impl TorrentRepository for MemoryDatabase {
    async fn increment_aggregates(&self, torrent_id: u64, seeders: i64, leechers: i64, times_completed: u64) -> Result<(), DatabaseError> {
        if let Some(torrent) = self.torrents.write().get_mut(&torrent_id) {
            torrent.seeders = torrent.seeders.saturating_add(seeders).max(0);
            torrent.leechers = torrent.leechers.saturating_add(leechers).max(0);
            torrent.times_completed = torrent.times_completed.saturating_add(times_completed);
        }
        Ok(())
    }
}

#[async_trait]
impl FreeleechRepository for MemoryDatabase {
    async fn personal_freeleech_exists(&self, user_id: u64) -> Result<bool, DatabaseError> {
        Ok(self.personal_freeleech.read_recursive().contains(&user_id))
    }

    async fn freeleech_token_exists(&self, user_id: u64, torrent_id: u64) -> Result<bool, DatabaseError> {
        Ok(self.freeleech_tokens.read_recursive().contains(&(user_id, torrent_id)))
    }
}

#[async_trait]
impl PeerRepository for MemoryDatabase {
    async fn find(&self, peer_id: &PeerId, user_id: u64, torrent_id: u64) -> Result<Option<Peer>, DatabaseError> {
        Ok(self.get_peer(peer_id, user_id, torrent_id))
    }

    async fn upsert(&self, peer: &Peer) -> Result<(), DatabaseError> {
        self.insert_peer(peer.clone());
        Ok(())
    }
}
