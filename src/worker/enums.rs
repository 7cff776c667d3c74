/// Result of one processing attempt.
pub mod job_decision;
