use std::sync::Arc;
use log::debug;
use crate::aggregate::structs::aggregate_outcome::AggregateOutcome;
use crate::aggregate::structs::aggregate_updater::AggregateUpdater;
use crate::announce::enums::announce_error::AnnounceError;
use crate::announce::enums::announce_event::AnnounceEvent;
use crate::credit::structs::credited_deltas::CreditedDeltas;
use crate::database::traits::torrent_repository::TorrentRepository;
use crate::database::traits::user_repository::UserRepository;
use crate::swarm::structs::swarm_deltas::SwarmDeltas;

impl AggregateUpdater {
    pub fn new(users: Arc<dyn UserRepository>, torrents: Arc<dyn TorrentRepository>) -> AggregateUpdater {
        AggregateUpdater { users, torrents }
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn apply(
        &self,
        user_id: u64,
        torrent_id: u64,
        event: AnnounceEvent,
        credited: &CreditedDeltas,
        swarm: &SwarmDeltas,
    ) -> Result<AggregateOutcome, AnnounceError> {
        let mut outcome = AggregateOutcome::default();
        if event != AnnounceEvent::Stopped && !credited.is_zero() {
            self.users.increment_aggregates(user_id, credited.uploaded, credited.downloaded).await?;
            debug!("[AGGREGATE] User {} +{} up +{} down", user_id, credited.uploaded, credited.downloaded);
            outcome.user_updated = true;
        }
        if !swarm.is_zero() {
            self.torrents.increment_aggregates(torrent_id, swarm.seeders, swarm.leechers, swarm.times_completed).await?;
            debug!("[AGGREGATE] Torrent {} seeders {:+} leechers {:+} completed +{}", torrent_id, swarm.seeders, swarm.leechers, swarm.times_completed);
            outcome.torrent_updated = true;
        }
        Ok(outcome)
    }
}
