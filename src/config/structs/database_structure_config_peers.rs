use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatabaseStructureConfigPeers {
    pub table_name: String,
    pub column_peer_id: String,
    pub column_user_id: String,
    pub column_torrent_id: String,
    pub column_uploaded: String,
    pub column_downloaded: String,
    pub column_left: String,
    pub column_connectable: String,
    pub column_active: String,
}
