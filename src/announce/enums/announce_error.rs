use thiserror::Error;
use crate::batch::errors::QueueError;
use crate::cache::errors::CacheError;
use crate::database::errors::DatabaseError;
use crate::guard::errors::LeaseError;

#[derive(Error, Debug)]
pub enum AnnounceError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Contention: {0}")]
    Contention(String),

    #[error("Emission failure: {0}")]
    EmissionFailure(#[from] QueueError),

    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    #[error("Lease error: {0}")]
    Lease(#[from] LeaseError),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}
