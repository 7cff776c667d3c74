use std::sync::Arc;
use std::time::Duration;
use chrono::Utc;
use log::{debug, error, info, warn};
use crate::aggregate::structs::aggregate_updater::AggregateUpdater;
use crate::announce::enums::announce_error::AnnounceError;
use crate::announce::enums::announce_event::AnnounceEvent;
use crate::announce::structs::announce_request::AnnounceRequest;
use crate::announce::structs::raw_announce::RawAnnounce;
use crate::batch::structs::batch_emitter::BatchEmitter;
use crate::batch::structs::history_batch_record::HistoryBatchRecord;
use crate::batch::structs::memory_queue::MemoryQueue;
use crate::batch::structs::peer_batch_record::PeerBatchRecord;
use crate::batch::structs::redis_queue::RedisQueue;
use crate::batch::traits::batch_queue::BatchQueue;
use crate::cache::structs::cache_connector::CacheConnector;
use crate::cache::structs::memory_flag_cache::MemoryFlagCache;
use crate::cache::traits::flag_cache::FlagCache;
use crate::config::enums::backend_engine::BackendEngine;
use crate::config::structs::configuration::Configuration;
use crate::credit::structs::credit_engine::CreditEngine;
use crate::credit::structs::credit_policy::CreditPolicy;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::memory_database::MemoryDatabase;
use crate::database::traits::freeleech_repository::FreeleechRepository;
use crate::database::traits::peer_repository::PeerRepository;
use crate::database::traits::torrent_repository::TorrentRepository;
use crate::database::traits::user_repository::UserRepository;
use crate::guard::structs::memory_lease::MemoryLease;
use crate::guard::structs::redis_lease::RedisLease;
use crate::guard::structs::serialization_guard::SerializationGuard;
use crate::guard::traits::lease_backend::LeaseBackend;
use crate::peer::structs::peer::Peer;
use crate::peer::structs::peer_state::PeerState;
use crate::peer::structs::static_connectable_check::StaticConnectableCheck;
use crate::peer::structs::tcp_connectable_check::TcpConnectableCheck;
use crate::peer::traits::connectable_check::ConnectableCheck;
use crate::processor::structs::announce_outcome::AnnounceOutcome;
use crate::processor::structs::announce_processor::AnnounceProcessor;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::swarm::enums::swarm_transition::SwarmTransition;
use crate::swarm::structs::swarm_deltas::SwarmDeltas;
use crate::tracker::structs::group_entry::GroupEntry;
use crate::tracker::structs::torrent_entry::TorrentEntry;
use crate::tracker::structs::user_entry::UserEntry;

impl AnnounceProcessor {
    pub fn new(
        guard: SerializationGuard,
        credit: CreditEngine,
        connectable: Arc<dyn ConnectableCheck>,
        peers: Arc<dyn PeerRepository>,
        aggregates: AggregateUpdater,
        emitter: BatchEmitter,
        stats: Arc<StatsAtomics>,
    ) -> AnnounceProcessor {
        AnnounceProcessor { guard, credit, connectable, peers, aggregates, emitter, stats }
    }

    /// Wires every backend named by the configuration.
    ///
    /// Disabled cache and database sections fall back to the in-process
    /// implementations, as do `memory` lease and queue engines.
    pub async fn from_config(config: &Configuration, create_database: bool, stats: Arc<StatsAtomics>) -> Result<AnnounceProcessor, AnnounceError> {
        let announce = &config.announce;

        let cache: Arc<dyn FlagCache> = if config.cache.enabled {
            Arc::new(CacheConnector::new(&config.cache).await?)
        } else {
            info!("[BOOT] Cache disabled, using in-process flag cache");
            Arc::new(MemoryFlagCache::new())
        };

        let users: Arc<dyn UserRepository>;
        let torrents: Arc<dyn TorrentRepository>;
        let freeleech: Arc<dyn FreeleechRepository>;
        let peers: Arc<dyn PeerRepository>;
        if config.database.enabled {
            let db = Arc::new(DatabaseConnector::new(config, create_database).await?);
            users = db.clone();
            torrents = db.clone();
            freeleech = db.clone();
            peers = db;
        } else {
            info!("[BOOT] Database disabled, using in-process aggregates");
            let db = Arc::new(MemoryDatabase::new());
            users = db.clone();
            torrents = db.clone();
            freeleech = db.clone();
            peers = db;
        }

        let lease: Arc<dyn LeaseBackend> = match config.lease.engine {
            BackendEngine::memory => Arc::new(MemoryLease::new()),
            BackendEngine::redis => Arc::new(RedisLease::connect(&config.lease.engine.url(&config.lease.address), &config.lease.prefix).await?),
        };

        let queue: Arc<dyn BatchQueue> = match config.queue.engine {
            BackendEngine::memory => Arc::new(MemoryQueue::new()),
            BackendEngine::redis => Arc::new(RedisQueue::connect(&config.queue.engine.url(&config.queue.address), &config.queue.prefix).await?),
        };

        let connectable: Arc<dyn ConnectableCheck> = if announce.connectable_check {
            Arc::new(TcpConnectableCheck::new(
                Duration::from_millis(announce.connectable_check_timeout),
                Duration::from_secs(announce.connectable_check_interval),
            ))
        } else {
            Arc::new(StaticConnectableCheck::new(false))
        };

        info!("[BOOT] Lease engine {}, queue engine {}, lease TTL {}s", config.lease.engine, config.queue.engine, announce.lease_ttl);
        Ok(AnnounceProcessor::new(
            SerializationGuard::new(lease, Duration::from_secs(announce.lease_ttl)),
            CreditEngine::new(CreditPolicy::from(announce), cache, freeleech),
            connectable,
            peers,
            AggregateUpdater::new(users, torrents),
            BatchEmitter::new(queue, &announce.peer_queue, &announce.history_queue),
            stats,
        ))
    }

    pub fn stats(&self) -> Arc<StatsAtomics> {
        self.stats.clone()
    }

    /// Evicts expired leases and stale reachability answers held in process.
    pub fn prune_expired(&self) -> usize {
        let leases = self.guard.prune();
        let connectable = self.connectable.prune();
        if leases + connectable > 0 {
            debug!("[CLEANUP] Pruned {} leases and {} connectable answers", leases, connectable);
        }
        leases + connectable
    }

    #[tracing::instrument(level = "debug", skip_all, fields(user_id = user.id, torrent_id = torrent.id))]
    pub async fn process(&self, raw: &RawAnnounce, user: &UserEntry, group: &GroupEntry, torrent: &TorrentEntry) -> Result<AnnounceOutcome, AnnounceError>
    {
        let transaction = crate::utils::sentry_tracing::start_trace_transaction("announce", "process");
        let result = self.guard.run(user.id, torrent.id, || self.process_locked(raw, user, group, torrent)).await;
        match &result {
            Ok(_) => { self.stats.update_stats(StatsEvent::AnnouncesProcessed, 1); }
            Err(AnnounceError::MalformedInput(reason)) => {
                debug!("[ANNOUNCE] Rejected announce of user {} on torrent {}: {}", user.id, torrent.id, reason);
                self.stats.update_stats(StatsEvent::AnnouncesMalformed, 1);
            }
            Err(AnnounceError::Contention(_)) => { self.stats.update_stats(StatsEvent::AnnouncesContended, 1); }
            Err(_) => {}
        }
        crate::utils::sentry_tracing::finish_trace_transaction(transaction, &result, &[]);
        result
    }

    async fn process_locked(&self, raw: &RawAnnounce, user: &UserEntry, group: &GroupEntry, torrent: &TorrentEntry) -> Result<AnnounceOutcome, AnnounceError>
    {
        let request = AnnounceRequest::normalize(raw)?;
        let previous = self.peers.find(&request.peer_id, user.id, torrent.id).await?;
        let state = PeerState::resolve(&request, previous.as_ref());
        let connectable = match state.event {
            AnnounceEvent::Stopped => false,
            _ => self.connectable.is_connectable(request.ip_addr(), request.port, &request.agent).await,
        };

        let overrides = self.credit.resolve_overrides(user.id, torrent.id).await?;
        let credited = self.credit.apply(state.uploaded_delta, state.downloaded_delta, group, torrent, overrides);

        let transition = SwarmTransition::classify(
            state.joins_swarm(),
            state.event == AnnounceEvent::Stopped,
            request.is_seeder(),
            state.previous_left,
        );
        let swarm = SwarmDeltas::from_transition(transition, state.event);
        debug!("[ANNOUNCE] User {} torrent {} event {} transition {}", user.id, torrent.id, state.event, transition);

        // Stored before any aggregate moves; a retried announce measures its deltas from this row.
        let peer = PeerBatchRecord::new(&request, &state, user.id, torrent.id, connectable);
        self.peers.upsert(&Peer::from(&peer)).await?;

        let aggregates = match self.aggregates.apply(user.id, torrent.id, state.event, &credited, &swarm).await {
            Ok(aggregates) => aggregates,
            Err(e) => {
                warn!(
                    "[AGGREGATE] Deltas of user {} on torrent {} lost (credited {}/{}, swarm {}/{}/{}): {}",
                    user.id, torrent.id, credited.uploaded, credited.downloaded,
                    swarm.seeders, swarm.leechers, swarm.times_completed, e
                );
                return Err(e);
            }
        };
        if aggregates.user_updated { self.stats.update_stats(StatsEvent::UsersUpdated, 1); }
        if aggregates.torrent_updated { self.stats.update_stats(StatsEvent::TorrentsUpdated, 1); }

        let history = HistoryBatchRecord::new(&request, &state, &credited, user.id, torrent.id, group.is_immune, Utc::now());
        if let Err(e) = self.emitter.emit(&peer, &history).await {
            error!("[EMIT] Records of user {} on torrent {} were not queued: {}", user.id, torrent.id, e);
            sentry::capture_message(
                &format!("Announce records of user {} on torrent {} were not queued: {}", user.id, torrent.id, e),
                sentry::Level::Error,
            );
            self.stats.update_stats(StatsEvent::EmissionFailures, 1);
            return Err(AnnounceError::EmissionFailure(e));
        }
        self.stats.update_stats(StatsEvent::PeerRecords, 1);
        self.stats.update_stats(StatsEvent::HistoryRecords, 1);

        Ok(AnnounceOutcome { state, transition, credited, swarm, aggregates, peer, history })
    }
}
