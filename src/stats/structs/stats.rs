use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub started: i64,
    pub announces_processed: i64,
    pub announces_malformed: i64,
    pub announces_contended: i64,
    pub emission_failures: i64,
    pub users_updated: i64,
    pub torrents_updated: i64,
    pub peer_records: i64,
    pub history_records: i64,
    pub jobs_requeued: i64,
    pub jobs_dropped: i64,
}
