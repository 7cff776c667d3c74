use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use crate::processor::structs::announce_processor::AnnounceProcessor;
use crate::worker::traits::job_queue::JobQueue;

#[derive(Clone)]
pub struct AnnounceWorker {
    pub(crate) processor: AnnounceProcessor,
    pub(crate) jobs: Arc<dyn JobQueue>,
    pub(crate) permits: Arc<Semaphore>,
    pub(crate) workers: usize,
    pub(crate) retry_delay: Duration,
    pub(crate) max_attempts: u32,
    pub(crate) poll_timeout: Duration,
}
