use serde::{Deserialize, Serialize};

/// One variant per counter in `StatsAtomics`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    AnnouncesProcessed,
    AnnouncesMalformed,
    AnnouncesContended,
    EmissionFailures,
    UsersUpdated,
    TorrentsUpdated,
    PeerRecords,
    HistoryRecords,
    JobsRequeued,
    JobsDropped,
}
