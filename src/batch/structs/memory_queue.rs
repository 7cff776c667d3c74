use std::collections::VecDeque;
use std::sync::Arc;
use ahash::AHashMap;
use parking_lot::Mutex;

#[derive(Debug, Clone, Default)]
pub struct MemoryQueue {
    pub(crate) queues: Arc<Mutex<AHashMap<String, VecDeque<String>>>>,
}
