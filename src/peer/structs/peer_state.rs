use crate::announce::enums::announce_event::AnnounceEvent;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PeerState {
    /// No stored record exists for this peer.
    pub is_new_peer: bool,
    /// A stored record exists and is still part of the swarm.
    pub was_active: bool,
    /// Event after first-sighting correction.
    pub event: AnnounceEvent,
    /// `left` of the stored record, 0 when the peer was not in the swarm.
    pub previous_left: u64,
    pub uploaded_delta: u64,
    pub downloaded_delta: u64,
}
