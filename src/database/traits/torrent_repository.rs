use async_trait::async_trait;
use crate::database::errors::DatabaseError;

#[async_trait]
pub trait TorrentRepository: Send + Sync {
    /// Seeders and leechers never drop below zero.
    async fn increment_aggregates(&self, torrent_id: u64, seeders: i64, leechers: i64, times_completed: u64) -> Result<(), DatabaseError>;
}
