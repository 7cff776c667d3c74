use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeaseError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Operation error: {0}")]
    OperationError(String),

    #[error("Redis error: {0}")]
    RedisError(#[from] redis::RedisError),
}
