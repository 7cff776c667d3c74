use serde::{Deserialize, Serialize};
use crate::peer::structs::peer_id::PeerId;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PeerBatchRecord {
    pub peer_id: PeerId,
    #[serde(with = "crate::common::serde_base64")]
    pub ip: Vec<u8>,
    pub port: u16,
    pub agent: String,
    pub uploaded: u64,
    pub downloaded: u64,
    pub left: u64,
    pub seeder: bool,
    pub torrent_id: u64,
    pub user_id: u64,
    pub connectable: bool,
    pub active: bool,
}
