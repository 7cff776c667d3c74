use serde::{Deserialize, Serialize};
use crate::config::enums::backend_engine::BackendEngine;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QueueConfig {
    pub engine: BackendEngine,
    pub address: String,
    pub prefix: String,
}
