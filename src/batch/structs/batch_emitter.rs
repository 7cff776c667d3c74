use std::sync::Arc;
use crate::batch::traits::batch_queue::BatchQueue;

#[derive(Clone)]
pub struct BatchEmitter {
    pub(crate) queue: Arc<dyn BatchQueue>,
    pub(crate) peer_queue: String,
    pub(crate) history_queue: String,
}
