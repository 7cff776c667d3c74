use crate::batch::errors::QueueError;
use crate::worker::structs::announce_job::AnnounceJob;

impl AnnounceJob {
    pub fn from_json(payload: &str) -> Result<AnnounceJob, QueueError> {
        Ok(serde_json::from_str(payload)?)
    }

    pub fn to_json(&self) -> Result<String, QueueError> {
        Ok(serde_json::to_string(self)?)
    }
}
