use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `uploaded`/`downloaded` are credited, `actual_*` are raw deltas and
/// `client_*` are the counters as reported.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HistoryBatchRecord {
    pub user_id: u64,
    pub torrent_id: u64,
    pub agent: String,
    pub uploaded: u64,
    pub downloaded: u64,
    pub actual_uploaded: u64,
    pub actual_downloaded: u64,
    pub client_uploaded: u64,
    pub client_downloaded: u64,
    pub seeder: bool,
    pub active: bool,
    pub seedtime: u64,
    pub immune: bool,
    pub completed_at: Option<DateTime<Utc>>,
}
