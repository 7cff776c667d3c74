use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use log::{error, info, warn};
use tokio::sync::Semaphore;
use crate::batch::errors::QueueError;
use crate::config::enums::backend_engine::BackendEngine;
use crate::config::structs::announce_config::AnnounceConfig;
use crate::config::structs::configuration::Configuration;
use crate::processor::structs::announce_processor::AnnounceProcessor;
use crate::stats::enums::stats_event::StatsEvent;
use crate::worker::enums::job_decision::JobDecision;
use crate::worker::structs::announce_job::AnnounceJob;
use crate::worker::structs::announce_worker::AnnounceWorker;
use crate::worker::structs::memory_job_queue::MemoryJobQueue;
use crate::worker::structs::redis_job_queue::RedisJobQueue;
use crate::worker::traits::job_queue::JobQueue;

const POLL_TIMEOUT: Duration = Duration::from_secs(5);
const QUEUE_ERROR_BACKOFF: Duration = Duration::from_secs(1);

impl AnnounceWorker {
    pub fn new(processor: AnnounceProcessor, jobs: Arc<dyn JobQueue>, config: &AnnounceConfig) -> AnnounceWorker {
        let workers = config.workers.max(1);
        AnnounceWorker {
            processor,
            jobs,
            permits: Arc::new(Semaphore::new(workers)),
            workers,
            retry_delay: Duration::from_secs(config.retry_delay),
            max_attempts: config.max_attempts,
            poll_timeout: POLL_TIMEOUT,
        }
    }

    pub async fn from_config(config: &Configuration, processor: AnnounceProcessor) -> Result<AnnounceWorker, QueueError> {
        let jobs: Arc<dyn JobQueue> = match config.queue.engine {
            BackendEngine::memory => {
                warn!("[WORKER] Job queue engine is memory, only in-process producers can reach this worker");
                Arc::new(MemoryJobQueue::new())
            }
            BackendEngine::redis => Arc::new(RedisJobQueue::connect(
                &config.queue.engine.url(&config.queue.address),
                &config.queue.prefix,
                &config.announce.job_queue,
            ).await?),
        };
        Ok(AnnounceWorker::new(processor, jobs, &config.announce))
    }

    pub fn jobs(&self) -> Arc<dyn JobQueue> {
        self.jobs.clone()
    }

    pub fn with_poll_timeout(mut self, poll_timeout: Duration) -> AnnounceWorker {
        self.poll_timeout = poll_timeout;
        self
    }

    /// Pops and dispatches jobs until `shutdown` completes, then waits for
    /// in-flight jobs to finish.
    pub async fn run<S>(&self, shutdown: S)
    where
        S: Future<Output = ()>,
    {
        info!("[WORKER] Starting with {} concurrent tasks", self.workers);
        tokio::pin!(shutdown);
        loop {
            let permit = tokio::select! {
                _ = &mut shutdown => break,
                permit = self.permits.clone().acquire_owned() => match permit {
                    Ok(permit) => permit,
                    Err(_) => break,
                },
            };
            let popped = tokio::select! {
                _ = &mut shutdown => break,
                popped = self.jobs.pop(self.poll_timeout) => popped,
            };
            match popped {
                Ok(Some(job)) => {
                    let worker = self.clone();
                    tokio::spawn(async move {
                        let decision = worker.process_job(job).await;
                        drop(permit);
                        if let JobDecision::Requeue(job) = decision {
                            worker.requeue(job).await;
                        }
                    });
                }
                Ok(None) => {}
                Err(e) => {
                    error!("[WORKER] Unable to pop a job: {}", e);
                    tokio::time::sleep(QUEUE_ERROR_BACKOFF).await;
                }
            }
        }
        info!("[WORKER] Shutting down, waiting for in-flight jobs...");
        let _ = self.permits.acquire_many(self.workers as u32).await;
        info!("[WORKER] Stopped");
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn process_job(&self, job: AnnounceJob) -> JobDecision {
        match self.processor.process(&job.announce, &job.user, &job.group, &job.torrent).await {
            Ok(_) => JobDecision::Done,
            Err(e) if e.is_requeueable() && job.attempts + 1 < self.max_attempts => {
                let mut job = job;
                job.attempts += 1;
                JobDecision::Requeue(job)
            }
            Err(e) => {
                warn!(
                    "[WORKER] Dropping announce of user {} on torrent {} after {} attempt(s): {}",
                    job.user.id, job.torrent.id, job.attempts + 1, e
                );
                self.processor.stats.update_stats(StatsEvent::JobsDropped, 1);
                JobDecision::Drop
            }
        }
    }

    /// Pushes `job` back after the retry delay.
    pub async fn requeue(&self, job: AnnounceJob) {
        tokio::time::sleep(self.retry_delay).await;
        match self.jobs.push(&job).await {
            Ok(()) => {
                self.processor.stats.update_stats(StatsEvent::JobsRequeued, 1);
            }
            Err(e) => {
                error!("[WORKER] Unable to requeue announce of user {} on torrent {}: {}", job.user.id, job.torrent.id, e);
                self.processor.stats.update_stats(StatsEvent::JobsDropped, 1);
            }
        }
    }
}
