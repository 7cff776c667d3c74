use std::sync::atomic::AtomicI64;

#[derive(Debug, Default)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub announces_processed: AtomicI64,
    pub announces_malformed: AtomicI64,
    pub announces_contended: AtomicI64,
    pub emission_failures: AtomicI64,
    pub users_updated: AtomicI64,
    pub torrents_updated: AtomicI64,
    pub peer_records: AtomicI64,
    pub history_records: AtomicI64,
    pub jobs_requeued: AtomicI64,
    pub jobs_dropped: AtomicI64,
}
