use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatabaseStructureConfigUsers {
    pub table_name: String,
    pub column_id: String,
    pub column_uploaded: String,
    pub column_downloaded: String,
}
