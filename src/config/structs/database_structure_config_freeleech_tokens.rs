use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatabaseStructureConfigFreeleechTokens {
    pub table_name: String,
    pub column_user_id: String,
    pub column_torrent_id: String,
}
