use chrono::{DateTime, Utc};
use crate::announce::enums::announce_event::AnnounceEvent;
use crate::announce::structs::announce_request::AnnounceRequest;
use crate::batch::structs::history_batch_record::HistoryBatchRecord;
use crate::common::common::truncate_agent;
use crate::credit::structs::credited_deltas::CreditedDeltas;
use crate::peer::structs::peer_state::PeerState;

impl HistoryBatchRecord {
    pub fn new(
        request: &AnnounceRequest,
        state: &PeerState,
        credited: &CreditedDeltas,
        user_id: u64,
        torrent_id: u64,
        immune: bool,
        now: DateTime<Utc>,
    ) -> HistoryBatchRecord {
        HistoryBatchRecord {
            user_id,
            torrent_id,
            agent: truncate_agent(&request.agent),
            uploaded: credited.uploaded,
            downloaded: credited.downloaded,
            actual_uploaded: state.uploaded_delta,
            actual_downloaded: state.downloaded_delta,
            client_uploaded: request.uploaded,
            client_downloaded: request.downloaded,
            seeder: request.is_seeder(),
            active: state.event != AnnounceEvent::Stopped,
            seedtime: 0,
            immune,
            completed_at: (state.event == AnnounceEvent::Completed).then_some(now),
        }
    }
}
