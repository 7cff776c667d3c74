use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatabaseStructureConfigTorrents {
    pub table_name: String,
    pub column_id: String,
    pub column_seeders: String,
    pub column_leechers: String,
    pub column_times_completed: String,
}
