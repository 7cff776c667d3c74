use crate::batch::structs::peer_batch_record::PeerBatchRecord;
use crate::peer::structs::peer::Peer;

impl Peer {
    pub fn is_seeder(&self) -> bool {
        self.left == 0
    }
}

impl From<&PeerBatchRecord> for Peer {
    fn from(record: &PeerBatchRecord) -> Peer {
        Peer {
            peer_id: record.peer_id.clone(),
            user_id: record.user_id,
            torrent_id: record.torrent_id,
            uploaded: record.uploaded,
            downloaded: record.downloaded,
            left: record.left,
            connectable: record.connectable,
            active: record.active,
        }
    }
}
