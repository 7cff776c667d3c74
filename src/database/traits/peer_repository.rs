use async_trait::async_trait;
use crate::database::errors::DatabaseError;
use crate::peer::structs::peer::Peer;
use crate::peer::structs::peer_id::PeerId;

/// Durable peer rows, keyed by (peer_id, user_id, torrent_id).
#[async_trait]
pub trait PeerRepository: Send + Sync {
    async fn find(&self, peer_id: &PeerId, user_id: u64, torrent_id: u64) -> Result<Option<Peer>, DatabaseError>;

    /// Inserts the row, or overwrites counters and flags of the existing one.
    async fn upsert(&self, peer: &Peer) -> Result<(), DatabaseError>;
}
