use std::sync::Arc;
use crate::aggregate::structs::aggregate_updater::AggregateUpdater;
use crate::batch::structs::batch_emitter::BatchEmitter;
use crate::credit::structs::credit_engine::CreditEngine;
use crate::database::traits::peer_repository::PeerRepository;
use crate::guard::structs::serialization_guard::SerializationGuard;
use crate::peer::traits::connectable_check::ConnectableCheck;
use crate::stats::structs::stats_atomics::StatsAtomics;

#[derive(Clone)]
pub struct AnnounceProcessor {
    pub(crate) guard: SerializationGuard,
    pub(crate) credit: CreditEngine,
    pub(crate) connectable: Arc<dyn ConnectableCheck>,
    pub(crate) peers: Arc<dyn PeerRepository>,
    pub(crate) aggregates: AggregateUpdater,
    pub(crate) emitter: BatchEmitter,
    pub(crate) stats: Arc<StatsAtomics>,
}
