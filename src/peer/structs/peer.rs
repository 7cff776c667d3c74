use serde::{Deserialize, Serialize};
use crate::peer::structs::peer_id::PeerId;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct Peer {
    pub peer_id: PeerId,
    pub user_id: u64,
    pub torrent_id: u64,
    pub uploaded: u64,
    pub downloaded: u64,
    pub left: u64,
    pub connectable: bool,
    pub active: bool,
}
