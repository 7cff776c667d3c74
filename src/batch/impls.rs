pub mod peer_batch_record;

pub mod history_batch_record;

pub mod memory_queue;

pub mod redis_queue;

pub mod batch_emitter;
