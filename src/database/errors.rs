use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),

    #[error("Not connected: {0}")]
    NotConnected(String),
}
