use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CreditedDeltas {
    pub uploaded: u64,
    pub downloaded: u64,
}
