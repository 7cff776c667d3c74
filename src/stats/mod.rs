//! Processing statistics.
//!
//! Counters are atomic integers shared by every worker task and read as a
//! serializable [`structs::stats::Stats`] snapshot. The binary logs a snapshot
//! every `log_console_interval` seconds.
//!
//! # Counters
//!
//! - announces processed, rejected as malformed, and deferred by contention
//! - user and torrent aggregate increments issued
//! - peer and history records queued, and emission failures
//! - jobs requeued for retry and jobs dropped
//!
//! # Example
//!
//! ```rust,ignore
//! use torrust_ledger::stats::enums::stats_event::StatsEvent;
//!
//! stats.update_stats(StatsEvent::AnnouncesProcessed, 1);
//! let snapshot = stats.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters).
pub mod structs;
