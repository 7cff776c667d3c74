use crate::announce::enums::announce_error::AnnounceError;

impl AnnounceError {
    /// Whether the announce may succeed when attempted again later.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AnnounceError::Contention(_) | AnnounceError::EmissionFailure(_) | AnnounceError::Lease(_)
        )
    }

    /// Whether the whole announce can be processed again without double counting.
    ///
    /// Only failures raised before any aggregate was touched qualify. An
    /// `EmissionFailure` happens after the increments, so replaying the job
    /// would credit the same traffic twice.
    pub fn is_requeueable(&self) -> bool {
        matches!(self, AnnounceError::Contention(_) | AnnounceError::Lease(_))
    }
}
