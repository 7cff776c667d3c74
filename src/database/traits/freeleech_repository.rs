use async_trait::async_trait;
use crate::database::errors::DatabaseError;

#[async_trait]
pub trait FreeleechRepository: Send + Sync {
    async fn personal_freeleech_exists(&self, user_id: u64) -> Result<bool, DatabaseError>;

    async fn freeleech_token_exists(&self, user_id: u64, torrent_id: u64) -> Result<bool, DatabaseError>;
}
