//! Outbound peer and history records.
//!
//! Every processed announce produces one [`structs::peer_batch_record::PeerBatchRecord`]
//! and one [`structs::history_batch_record::HistoryBatchRecord`]. Both are
//! serialized as JSON and appended to named queues, where downstream batch
//! workers coalesce and persist them. Delivery is at least once; nothing here
//! waits for persistence.
//!
//! # Queues
//!
//! - `MemoryQueue` keeps per-name FIFO lists in process
//! - `RedisQueue` appends with `RPUSH` under the configured prefix

/// Error types for queue operations.
pub mod errors;

/// Implementation blocks for records, queues and the emitter.
pub mod impls;

/// Records, queues and the emitter.
pub mod structs;

/// Queue trait.
pub mod traits;

/// Unit tests for emission.
pub mod tests;
