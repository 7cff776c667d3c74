use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::sync::mpsc::unbounded_channel;
use crate::batch::errors::QueueError;
use crate::worker::structs::announce_job::AnnounceJob;
use crate::worker::structs::memory_job_queue::MemoryJobQueue;
use crate::worker::traits::job_queue::JobQueue;

impl MemoryJobQueue {
    pub fn new() -> MemoryJobQueue {
        let (sender, receiver) = unbounded_channel();
        MemoryJobQueue {
            sender,
            receiver: Arc::new(Mutex::new(receiver)),
        }
    }
}

impl Default for MemoryJobQueue {
    fn default() -> Self {
        MemoryJobQueue::new()
    }
}

#[async_trait]
impl JobQueue for MemoryJobQueue {
    async fn pop(&self, timeout: Duration) -> Result<Option<AnnounceJob>, QueueError> {
        let mut receiver = self.receiver.lock().await;
        match tokio::time::timeout(timeout, receiver.recv()).await {
            Ok(job) => Ok(job),
            Err(_) => Ok(None),
        }
    }

    async fn push(&self, job: &AnnounceJob) -> Result<(), QueueError> {
        self.sender.send(job.clone())
            .map_err(|_| QueueError::ConnectionError(String::from("job channel closed")))
    }
}
