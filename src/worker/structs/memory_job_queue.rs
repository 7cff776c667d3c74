use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use crate::worker::structs::announce_job::AnnounceJob;

#[derive(Debug, Clone)]
pub struct MemoryJobQueue {
    pub(crate) sender: UnboundedSender<AnnounceJob>,
    pub(crate) receiver: Arc<Mutex<UnboundedReceiver<AnnounceJob>>>,
}
