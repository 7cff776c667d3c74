/// Snapshot of one peer after an announce.
pub mod peer_batch_record;

/// Traffic history entry of one announce.
pub mod history_batch_record;

/// In-process named queues.
pub mod memory_queue;

/// Redis list backed named queues.
pub mod redis_queue;

/// Pushes both records of an announce.
pub mod batch_emitter;
