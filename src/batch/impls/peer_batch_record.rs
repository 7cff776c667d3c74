use crate::announce::enums::announce_event::AnnounceEvent;
use crate::announce::structs::announce_request::AnnounceRequest;
use crate::batch::structs::peer_batch_record::PeerBatchRecord;
use crate::common::common::truncate_agent;
use crate::peer::structs::peer_state::PeerState;

impl PeerBatchRecord {
    /// `state.event` is the effective event, after first-sighting correction.
    pub fn new(request: &AnnounceRequest, state: &PeerState, user_id: u64, torrent_id: u64, connectable: bool) -> PeerBatchRecord {
        PeerBatchRecord {
            peer_id: request.peer_id.clone(),
            ip: request.ip.clone(),
            port: request.port,
            agent: truncate_agent(&request.agent),
            uploaded: request.uploaded,
            downloaded: request.downloaded,
            left: request.left,
            seeder: request.is_seeder(),
            torrent_id,
            user_id,
            connectable,
            active: state.event != AnnounceEvent::Stopped,
        }
    }
}
