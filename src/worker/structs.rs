/// One queued announce.
pub mod announce_job;

/// In-process job channel.
pub mod memory_job_queue;

/// Redis list of JSON encoded jobs.
pub mod redis_job_queue;

/// Pops, dispatches and retries jobs.
pub mod announce_worker;
