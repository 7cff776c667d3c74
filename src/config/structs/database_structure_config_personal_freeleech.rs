use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatabaseStructureConfigPersonalFreeleech {
    pub table_name: String,
    pub column_user_id: String,
}
