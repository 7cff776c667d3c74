use std::fmt;
use async_trait::async_trait;
use crate::batch::errors::QueueError;
use crate::batch::structs::redis_queue::RedisQueue;
use crate::batch::traits::batch_queue::BatchQueue;

impl fmt::Debug for RedisQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisQueue")
            .field("connection", &"<redis::aio::MultiplexedConnection>")
            .field("prefix", &self.prefix)
            .finish()
    }
}

impl RedisQueue {
    pub async fn connect(url: &str, prefix: &str) -> Result<Self, QueueError> {
        let client = redis::Client::open(url)
            .map_err(|e| QueueError::ConnectionError(format!("Failed to create Redis client: {}", e)))?;
        let connection = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| QueueError::ConnectionError(format!("Failed to connect to Redis: {}", e)))?;
        Ok(Self {
            connection,
            prefix: prefix.to_string(),
        })
    }

    pub fn queue_key(&self, queue: &str) -> String {
        format!("{}{}", self.prefix, queue)
    }
}

#[async_trait]
impl BatchQueue for RedisQueue {
    async fn push(&self, queue: &str, payload: String) -> Result<(), QueueError> {
        let mut conn = self.connection.clone();
        redis::cmd("RPUSH")
            .arg(self.queue_key(queue))
            .arg(payload)
            .query_async::<()>(&mut conn)
            .await?;
        Ok(())
    }
}
