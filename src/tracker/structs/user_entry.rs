use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct UserEntry {
    pub id: u64,
    pub uploaded: u64,
    pub downloaded: u64,
}
