pub mod announce_job;

pub mod memory_job_queue;

pub mod redis_job_queue;

pub mod announce_worker;
