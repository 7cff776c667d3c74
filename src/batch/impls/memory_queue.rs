use async_trait::async_trait;
use crate::batch::errors::QueueError;
use crate::batch::structs::memory_queue::MemoryQueue;
use crate::batch::traits::batch_queue::BatchQueue;

impl MemoryQueue {
    pub fn new() -> MemoryQueue {
        MemoryQueue::default()
    }

    pub fn len(&self, queue: &str) -> usize {
        self.queues.lock().get(queue).map_or(0, |q| q.len())
    }

    pub fn is_empty(&self, queue: &str) -> bool {
        self.len(queue) == 0
    }

    /// Takes every pending payload of `queue`, oldest first.
    pub fn drain(&self, queue: &str) -> Vec<String> {
        self.queues.lock().get_mut(queue).map(|q| q.drain(..).collect()).unwrap_or_default()
    }
}

#[async_trait]
impl BatchQueue for MemoryQueue {
    async fn push(&self, queue: &str, payload: String) -> Result<(), QueueError> {
        self.queues.lock().entry(queue.to_string()).or_default().push_back(payload);
        Ok(())
    }
}
