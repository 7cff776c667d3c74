use std::future::Future;
use log::warn;
use crate::cache::traits::flag_cache::FlagCache;
use crate::database::errors::DatabaseError;

pub fn personal_freeleech_key(user_id: u64) -> String {
    format!("personal_freeleech:{}", user_id)
}

pub fn freeleech_token_key(user_id: u64, torrent_id: u64) -> String {
    format!("freeleech_token:{}:{}", user_id, torrent_id)
}

/// Returns the cached flag under `key`, or awaits `compute` and remembers its answer.
///
/// Cache failures never fail the lookup: an unreadable entry falls through to
/// `compute`, and an answer that cannot be stored is only logged.
pub async fn remember_flag<F>(cache: &dyn FlagCache, key: &str, compute: F) -> Result<bool, DatabaseError>
where
    F: Future<Output = Result<bool, DatabaseError>> + Send,
{
    match cache.get_flag(key).await {
        Ok(Some(value)) => return Ok(value),
        Ok(None) => {}
        Err(e) => warn!("[CACHE] Unable to read {}: {}", key, e),
    }
    let value = compute.await?;
    if let Err(e) = cache.set_flag(key, value).await {
        warn!("[CACHE] Unable to store {}: {}", key, e);
    }
    Ok(value)
}
