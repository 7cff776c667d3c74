use std::fmt;
use std::time::Duration;
use async_trait::async_trait;
use log::warn;
use crate::batch::errors::QueueError;
use crate::worker::structs::announce_job::AnnounceJob;
use crate::worker::structs::redis_job_queue::RedisJobQueue;
use crate::worker::traits::job_queue::JobQueue;

impl fmt::Debug for RedisJobQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisJobQueue")
            .field("connection", &"<redis::aio::MultiplexedConnection>")
            .field("key", &self.key)
            .finish()
    }
}

impl RedisJobQueue {
    pub async fn connect(url: &str, prefix: &str, queue: &str) -> Result<Self, QueueError> {
        let client = redis::Client::open(url)
            .map_err(|e| QueueError::ConnectionError(format!("Failed to create Redis client: {}", e)))?;
        let pop_connection = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| QueueError::ConnectionError(format!("Failed to connect to Redis: {}", e)))?;
        let push_connection = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| QueueError::ConnectionError(format!("Failed to connect to Redis: {}", e)))?;
        Ok(Self {
            pop_connection,
            push_connection,
            key: format!("{}{}", prefix, queue),
        })
    }
}

#[async_trait]
impl JobQueue for RedisJobQueue {
    async fn pop(&self, timeout: Duration) -> Result<Option<AnnounceJob>, QueueError> {
        let mut conn = self.pop_connection.clone();
        let reply: Option<(String, String)> = redis::cmd("BLPOP")
            .arg(&self.key)
            .arg(timeout.as_secs().max(1))
            .query_async(&mut conn)
            .await?;
        match reply {
            None => Ok(None),
            Some((_, payload)) => match AnnounceJob::from_json(&payload) {
                Ok(job) => Ok(Some(job)),
                Err(e) => {
                    warn!("[WORKER] Discarding undecodable job from {}: {}", self.key, e);
                    Ok(None)
                }
            },
        }
    }

    async fn push(&self, job: &AnnounceJob) -> Result<(), QueueError> {
        let mut conn = self.push_connection.clone();
        redis::cmd("RPUSH")
            .arg(&self.key)
            .arg(job.to_json()?)
            .query_async::<()>(&mut conn)
            .await?;
        Ok(())
    }
}
