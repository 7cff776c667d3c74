use std::sync::atomic::{AtomicI64, Ordering};
use crate::common::common::get_sys_time_in_secs;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl StatsAtomics {
    pub fn new() -> StatsAtomics {
        let stats = StatsAtomics::default();
        stats.started.store(get_sys_time_in_secs() as i64, Ordering::SeqCst);
        stats
    }

    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.started.load(Ordering::SeqCst),
            announces_processed: self.announces_processed.load(Ordering::SeqCst),
            announces_malformed: self.announces_malformed.load(Ordering::SeqCst),
            announces_contended: self.announces_contended.load(Ordering::SeqCst),
            emission_failures: self.emission_failures.load(Ordering::SeqCst),
            users_updated: self.users_updated.load(Ordering::SeqCst),
            torrents_updated: self.torrents_updated.load(Ordering::SeqCst),
            peer_records: self.peer_records.load(Ordering::SeqCst),
            history_records: self.history_records.load(Ordering::SeqCst),
            jobs_requeued: self.jobs_requeued.load(Ordering::SeqCst),
            jobs_dropped: self.jobs_dropped.load(Ordering::SeqCst),
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        let counter = self.counter(event);
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
        self.get_stats()
    }

    fn counter(&self, event: StatsEvent) -> &AtomicI64
    {
        match event {
            StatsEvent::AnnouncesProcessed => &self.announces_processed,
            StatsEvent::AnnouncesMalformed => &self.announces_malformed,
            StatsEvent::AnnouncesContended => &self.announces_contended,
            StatsEvent::EmissionFailures => &self.emission_failures,
            StatsEvent::UsersUpdated => &self.users_updated,
            StatsEvent::TorrentsUpdated => &self.torrents_updated,
            StatsEvent::PeerRecords => &self.peer_records,
            StatsEvent::HistoryRecords => &self.history_records,
            StatsEvent::JobsRequeued => &self.jobs_requeued,
            StatsEvent::JobsDropped => &self.jobs_dropped,
        }
    }
}
