use serde::{Deserialize, Serialize};
use crate::config::structs::announce_config::AnnounceConfig;
use crate::config::structs::cache_config::CacheConfig;
use crate::config::structs::database_config::DatabaseConfig;
use crate::config::structs::database_structure_config::DatabaseStructureConfig;
use crate::config::structs::lease_config::LeaseConfig;
use crate::config::structs::queue_config::QueueConfig;
use crate::config::structs::sentry_config::SentryConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: u64,
    pub announce: AnnounceConfig,
    pub cache: CacheConfig,
    pub lease: LeaseConfig,
    pub queue: QueueConfig,
    pub database: DatabaseConfig,
    pub database_structure: DatabaseStructureConfig,
    pub sentry_config: SentryConfig,
}
