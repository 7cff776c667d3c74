use crate::worker::structs::announce_job::AnnounceJob;

#[derive(Clone, Debug, PartialEq)]
pub enum JobDecision {
    Done,
    Requeue(AnnounceJob),
    Drop,
}
