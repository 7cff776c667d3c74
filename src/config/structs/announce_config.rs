use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AnnounceConfig {
    pub global_freeleech: bool,
    pub global_double_upload: bool,
    pub lease_ttl: u64,
    pub retry_delay: u64,
    pub max_attempts: u32,
    pub workers: usize,
    pub job_queue: String,
    pub peer_queue: String,
    pub history_queue: String,
    pub connectable_check: bool,
    pub connectable_check_interval: u64,
    pub connectable_check_timeout: u64,
}
