use crate::announce::enums::announce_event::AnnounceEvent;
use crate::peer::structs::peer_id::PeerId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnounceRequest {
    pub event: AnnounceEvent,
    pub peer_id: PeerId,
    pub ip: Vec<u8>,
    pub port: u16,
    pub uploaded: u64,
    pub downloaded: u64,
    pub left: u64,
    pub agent: String,
}
