//! Queue driven announce processing.
//!
//! Jobs carry the raw announce together with the already loaded user, group
//! and torrent. [`structs::announce_worker::AnnounceWorker::run`] pops jobs and
//! processes each on its own task, with at most `workers` in flight.
//!
//! # Retries
//!
//! A job that failed before touching any aggregate (lease busy, lease backend
//! down) is pushed back after `retry_delay` until `max_attempts` is reached.
//! Every other failure is logged and the job dropped.

/// What to do with a job after processing.
pub mod enums;

/// Implementation blocks for job queues and the worker.
pub mod impls;

/// Jobs, queues and the worker.
pub mod structs;

/// Job queue trait.
pub mod traits;

/// Unit tests for the worker.
pub mod tests;
