use log::debug;
use crate::announce::enums::announce_event::AnnounceEvent;
use crate::announce::structs::announce_request::AnnounceRequest;
use crate::peer::structs::peer::Peer;
use crate::peer::structs::peer_state::PeerState;

impl PeerState {
    /// Derives the announce's state from the stored row of the same peer, if any.
    pub fn resolve(request: &AnnounceRequest, previous: Option<&Peer>) -> PeerState
    {
        match previous {
            None => {
                let resumed = request.uploaded > 0 || request.downloaded > 0;
                if resumed {
                    debug!("[RESOLVE] Peer {} resumed an unknown session, forcing started", request.peer_id);
                }
                PeerState {
                    is_new_peer: true,
                    was_active: false,
                    event: if resumed { AnnounceEvent::Started } else { request.event },
                    previous_left: 0,
                    uploaded_delta: 0,
                    downloaded_delta: 0,
                }
            }
            Some(previous) => PeerState {
                is_new_peer: false,
                was_active: previous.active,
                event: request.event,
                previous_left: if previous.active { previous.left } else { 0 },
                uploaded_delta: request.uploaded.saturating_sub(previous.uploaded),
                downloaded_delta: request.downloaded.saturating_sub(previous.downloaded),
            }
        }
    }

    /// Whether this announce brings the peer into the swarm rather than updating it.
    pub fn joins_swarm(&self) -> bool {
        !self.was_active
    }
}
