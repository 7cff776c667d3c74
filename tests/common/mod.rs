#![allow(dead_code)]
use std::sync::Arc;
use std::time::Duration;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use torrust_ledger::aggregate::structs::aggregate_updater::AggregateUpdater;
use torrust_ledger::announce::structs::raw_announce::RawAnnounce;
use torrust_ledger::batch::structs::batch_emitter::BatchEmitter;
use torrust_ledger::batch::structs::history_batch_record::HistoryBatchRecord;
use torrust_ledger::batch::structs::memory_queue::MemoryQueue;
use torrust_ledger::cache::structs::memory_flag_cache::MemoryFlagCache;
use torrust_ledger::config::structs::configuration::Configuration;
use torrust_ledger::credit::structs::credit_engine::CreditEngine;
use torrust_ledger::credit::structs::credit_policy::CreditPolicy;
use torrust_ledger::database::structs::memory_database::{MemoryDatabase, TorrentTotals};
use torrust_ledger::guard::structs::memory_lease::MemoryLease;
use torrust_ledger::guard::structs::serialization_guard::SerializationGuard;
use torrust_ledger::peer::structs::peer::Peer;
use torrust_ledger::peer::structs::peer_id::PeerId;
use torrust_ledger::peer::structs::static_connectable_check::StaticConnectableCheck;
use torrust_ledger::processor::structs::announce_processor::AnnounceProcessor;
use torrust_ledger::stats::structs::stats_atomics::StatsAtomics;
use torrust_ledger::tracker::structs::torrent_entry::TorrentEntry;
use torrust_ledger::tracker::structs::user_entry::UserEntry;

pub const USER_ID: u64 = 1;
pub const TORRENT_ID: u64 = 2;
pub const PEER_ID: &[u8; 20] = b"-TR4050-aaaaaaaaaaaa";

pub struct TestLedger {
    pub processor: AnnounceProcessor,
    pub db: MemoryDatabase,
    pub cache: MemoryFlagCache,
    pub lease: MemoryLease,
    pub queue: MemoryQueue,
    pub stats: Arc<StatsAtomics>,
}

pub fn create_test_config() -> Configuration {
    let mut config = Configuration::init();
    config.log_level = String::from("off");
    config.announce.retry_delay = 0;
    config
}

pub fn create_test_ledger(policy: CreditPolicy) -> TestLedger {
    let db = MemoryDatabase::new();
    db.insert_user(UserEntry { id: USER_ID, uploaded: 0, downloaded: 0 });
    db.insert_torrent(TORRENT_ID, TorrentTotals::default());
    let cache = MemoryFlagCache::new();
    let lease = MemoryLease::new();
    let queue = MemoryQueue::new();
    let stats = Arc::new(StatsAtomics::new());
    let processor = AnnounceProcessor::new(
        SerializationGuard::new(Arc::new(lease.clone()), Duration::from_secs(30)),
        CreditEngine::new(policy, Arc::new(cache.clone()), Arc::new(db.clone())),
        Arc::new(StaticConnectableCheck::new(false)),
        Arc::new(db.clone()),
        AggregateUpdater::new(Arc::new(db.clone()), Arc::new(db.clone())),
        BatchEmitter::new(Arc::new(queue.clone()), "peers", "history"),
        stats.clone(),
    );
    TestLedger { processor, db, cache, lease, queue, stats }
}

pub fn user() -> UserEntry {
    UserEntry { id: USER_ID, uploaded: 0, downloaded: 0 }
}

pub fn raw_announce(event: Option<&str>, uploaded: u64, downloaded: u64, left: u64) -> RawAnnounce {
    RawAnnounce {
        event: event.map(String::from),
        peer_id: STANDARD.encode(PEER_ID),
        ip: STANDARD.encode([203, 0, 113, 7]),
        port: Some(String::from("51413")),
        uploaded: Some(uploaded.to_string()),
        downloaded: Some(downloaded.to_string()),
        left: Some(left.to_string()),
        agent: String::from("Transmission/4.0.5"),
    }
}

/// Stores a peer row for the test pair and returns the torrent it belongs to.
pub fn store_peer(ledger: &TestLedger, uploaded: u64, downloaded: u64, left: u64, active: bool) -> TorrentEntry {
    ledger.db.insert_peer(Peer {
        peer_id: peer_id(),
        user_id: USER_ID,
        torrent_id: TORRENT_ID,
        uploaded,
        downloaded,
        left,
        connectable: false,
        active,
    });
    TorrentEntry::new(TORRENT_ID)
}

pub fn stored_peer(ledger: &TestLedger) -> Option<Peer> {
    ledger.db.get_peer(&peer_id(), USER_ID, TORRENT_ID)
}

pub fn peer_id() -> PeerId {
    PeerId(PEER_ID.to_vec())
}

pub fn history(ledger: &TestLedger) -> Vec<HistoryBatchRecord> {
    ledger.queue.drain("history").iter().map(|h| serde_json::from_str(h).unwrap()).collect()
}
