use std::sync::Arc;
use ahash::AHashMap;
use parking_lot::RwLock;

#[derive(Debug, Clone, Default)]
pub struct MemoryFlagCache {
    pub(crate) flags: Arc<RwLock<AHashMap<String, bool>>>,
}
