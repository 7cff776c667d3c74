/// Source and sink of announce jobs.
pub mod job_queue;
