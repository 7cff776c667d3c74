use std::fmt;
use std::time::Duration;
use async_trait::async_trait;
use log::debug;
use crate::guard::errors::LeaseError;
use crate::guard::structs::lease_token::LeaseToken;
use crate::guard::structs::redis_lease::RedisLease;
use crate::guard::traits::lease_backend::LeaseBackend;

const RELEASE_SCRIPT: &str = r#"
if redis.call("GET", KEYS[1]) == ARGV[1] then
    return redis.call("DEL", KEYS[1])
else
    return 0
end
"#;

impl fmt::Debug for RedisLease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisLease")
            .field("connection", &"<redis::aio::MultiplexedConnection>")
            .field("prefix", &self.prefix)
            .finish()
    }
}

impl RedisLease {
    pub async fn connect(url: &str, prefix: &str) -> Result<Self, LeaseError> {
        let client = redis::Client::open(url)
            .map_err(|e| LeaseError::ConnectionError(format!("Failed to create Redis client: {}", e)))?;
        let connection = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| LeaseError::ConnectionError(format!("Failed to connect to Redis: {}", e)))?;
        Ok(Self {
            connection,
            prefix: prefix.to_string(),
        })
    }

    fn lease_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

#[async_trait]
impl LeaseBackend for RedisLease {
    async fn acquire(&self, key: &str, ttl: Duration) -> Result<Option<LeaseToken>, LeaseError> {
        let mut conn = self.connection.clone();
        let token = LeaseToken::generate();
        let ttl_ms = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX).max(1);
        let reply: Option<String> = redis::cmd("SET")
            .arg(self.lease_key(key))
            .arg(token.as_str())
            .arg("NX")
            .arg("PX")
            .arg(ttl_ms)
            .query_async(&mut conn)
            .await?;
        match reply {
            Some(_) => {
                debug!("[Redis] Lease {} acquired", key);
                Ok(Some(token))
            }
            None => Ok(None),
        }
    }

    async fn release(&self, key: &str, token: &LeaseToken) -> Result<bool, LeaseError> {
        let mut conn = self.connection.clone();
        let removed: i64 = redis::Script::new(RELEASE_SCRIPT)
            .key(self.lease_key(key))
            .arg(token.as_str())
            .invoke_async(&mut conn)
            .await?;
        debug!("[Redis] Lease {} released ({})", key, removed);
        Ok(removed > 0)
    }
}
