mod common;

use std::sync::Arc;
use std::time::Duration;
use sqlx::{Row, SqlitePool};
use torrust_ledger::aggregate::structs::aggregate_updater::AggregateUpdater;
use torrust_ledger::batch::structs::batch_emitter::BatchEmitter;
use torrust_ledger::batch::structs::memory_queue::MemoryQueue;
use torrust_ledger::cache::structs::memory_flag_cache::MemoryFlagCache;
use torrust_ledger::credit::structs::credit_engine::CreditEngine;
use torrust_ledger::credit::structs::credit_policy::CreditPolicy;
use torrust_ledger::database::structs::database_connector::DatabaseConnector;
use torrust_ledger::guard::structs::memory_lease::MemoryLease;
use torrust_ledger::guard::structs::serialization_guard::SerializationGuard;
use torrust_ledger::peer::structs::static_connectable_check::StaticConnectableCheck;
use torrust_ledger::processor::structs::announce_processor::AnnounceProcessor;
use torrust_ledger::stats::structs::stats_atomics::StatsAtomics;
use torrust_ledger::tracker::structs::group_entry::GroupEntry;
use torrust_ledger::tracker::structs::torrent_entry::TorrentEntry;

struct SqliteLedger {
    processor: AnnounceProcessor,
    pool: SqlitePool,
    _dir: tempfile::TempDir,
}

async fn sqlite_ledger() -> SqliteLedger {
    let dir = tempfile::tempdir().unwrap();
    let dsl = format!("sqlite://{}", dir.path().join("ledger.db").to_string_lossy());
    let mut config = common::create_test_config();
    config.database.enabled = true;
    config.database.path = dsl.clone();
    config.database.max_connections = 1;
    let db = Arc::new(DatabaseConnector::new(&config, true).await.unwrap());
    let processor = AnnounceProcessor::new(
        SerializationGuard::new(Arc::new(MemoryLease::new()), Duration::from_secs(30)),
        CreditEngine::new(CreditPolicy::default(), Arc::new(MemoryFlagCache::new()), db.clone()),
        Arc::new(StaticConnectableCheck::new(false)),
        db.clone(),
        AggregateUpdater::new(db.clone(), db.clone()),
        BatchEmitter::new(Arc::new(MemoryQueue::new()), "peers", "history"),
        Arc::new(StatsAtomics::new()),
    );
    let pool = SqlitePool::connect(&dsl).await.unwrap();
    SqliteLedger { processor, pool, _dir: dir }
}

#[tokio::test]
async fn test_announces_update_sqlite_aggregates() {
    let ledger = sqlite_ledger().await;
    let (processor, pool) = (&ledger.processor, &ledger.pool);
    sqlx::query("INSERT INTO users (id, uploaded, downloaded) VALUES (1, 0, 0)").execute(pool).await.unwrap();
    sqlx::query("INSERT INTO torrents (id, seeders, leechers, times_completed) VALUES (2, 0, 0, 0)").execute(pool).await.unwrap();

    let started = processor
        .process(&common::raw_announce(Some("started"), 0, 0, 1000), &common::user(), &GroupEntry::default(), &TorrentEntry::new(common::TORRENT_ID))
        .await
        .unwrap();
    assert!(started.aggregates.torrent_updated);

    processor
        .process(&common::raw_announce(Some("completed"), 300, 1000, 0), &common::user(), &GroupEntry::default(), &TorrentEntry::new(common::TORRENT_ID))
        .await
        .unwrap();

    let row = sqlx::query("SELECT uploaded, downloaded FROM users WHERE id = 1").fetch_one(pool).await.unwrap();
    assert_eq!(row.get::<i64, _>(0), 300);
    assert_eq!(row.get::<i64, _>(1), 1000);
    let row = sqlx::query("SELECT seeders, leechers, times_completed FROM torrents WHERE id = 2").fetch_one(pool).await.unwrap();
    assert_eq!(row.get::<i64, _>(0), 1);
    assert_eq!(row.get::<i64, _>(1), 0);
    assert_eq!(row.get::<i64, _>(2), 1);
    let row = sqlx::query("SELECT uploaded, downloaded, `left`, active FROM peers WHERE user_id = 1 AND torrent_id = 2")
        .fetch_one(pool)
        .await
        .unwrap();
    assert_eq!(row.get::<i64, _>(0), 300);
    assert_eq!(row.get::<i64, _>(1), 1000);
    assert_eq!(row.get::<i64, _>(2), 0);
    assert_eq!(row.get::<i64, _>(3), 1);
}

#[tokio::test]
async fn test_freeleech_token_in_sqlite_zeroes_download_credit() {
    let ledger = sqlite_ledger().await;
    let (processor, pool) = (&ledger.processor, &ledger.pool);
    sqlx::query("INSERT INTO users (id, uploaded, downloaded) VALUES (1, 0, 0)").execute(pool).await.unwrap();
    sqlx::query("INSERT INTO freeleech_tokens (user_id, torrent_id) VALUES (1, 2)").execute(pool).await.unwrap();
    sqlx::query("INSERT INTO peers (peer_id, user_id, torrent_id, uploaded, downloaded, `left`, connectable, active) VALUES (?, 1, 2, 0, 0, 5000, 0, 1)")
        .bind(common::PEER_ID.to_vec())
        .execute(pool)
        .await
        .unwrap();

    let torrent = TorrentEntry::new(common::TORRENT_ID);
    let outcome = processor
        .process(&common::raw_announce(None, 40, 2500, 2500), &common::user(), &GroupEntry::default(), &torrent)
        .await
        .unwrap();
    assert_eq!((outcome.credited.uploaded, outcome.credited.downloaded), (40, 0));

    let row = sqlx::query("SELECT uploaded, downloaded FROM users WHERE id = 1").fetch_one(pool).await.unwrap();
    assert_eq!(row.get::<i64, _>(0), 40);
    assert_eq!(row.get::<i64, _>(1), 0);
}
