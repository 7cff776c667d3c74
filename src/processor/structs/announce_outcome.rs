use crate::aggregate::structs::aggregate_outcome::AggregateOutcome;
use crate::batch::structs::history_batch_record::HistoryBatchRecord;
use crate::batch::structs::peer_batch_record::PeerBatchRecord;
use crate::credit::structs::credited_deltas::CreditedDeltas;
use crate::peer::structs::peer_state::PeerState;
use crate::swarm::enums::swarm_transition::SwarmTransition;
use crate::swarm::structs::swarm_deltas::SwarmDeltas;

/// `state.event` is the effective event; `peer` and `history` are the records
/// that were queued.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnounceOutcome {
    pub state: PeerState,
    pub transition: SwarmTransition,
    pub credited: CreditedDeltas,
    pub swarm: SwarmDeltas,
    pub aggregates: AggregateOutcome,
    pub peer: PeerBatchRecord,
    pub history: HistoryBatchRecord,
}
