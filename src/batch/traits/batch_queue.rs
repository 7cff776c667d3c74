use async_trait::async_trait;
use crate::batch::errors::QueueError;

#[async_trait]
pub trait BatchQueue: Send + Sync {
    async fn push(&self, queue: &str, payload: String) -> Result<(), QueueError>;
}
