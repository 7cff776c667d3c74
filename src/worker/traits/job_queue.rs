use std::time::Duration;
use async_trait::async_trait;
use crate::batch::errors::QueueError;
use crate::worker::structs::announce_job::AnnounceJob;

#[async_trait]
pub trait JobQueue: Send + Sync {
    /// Waits up to `timeout` for the next job.
    async fn pop(&self, timeout: Duration) -> Result<Option<AnnounceJob>, QueueError>;

    async fn push(&self, job: &AnnounceJob) -> Result<(), QueueError>;
}
