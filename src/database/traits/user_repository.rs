use async_trait::async_trait;
use crate::database::errors::DatabaseError;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn increment_aggregates(&self, user_id: u64, uploaded: u64, downloaded: u64) -> Result<(), DatabaseError>;
}
