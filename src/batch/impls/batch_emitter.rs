use std::sync::Arc;
use log::debug;
use crate::batch::errors::QueueError;
use crate::batch::structs::batch_emitter::BatchEmitter;
use crate::batch::structs::history_batch_record::HistoryBatchRecord;
use crate::batch::structs::peer_batch_record::PeerBatchRecord;
use crate::batch::traits::batch_queue::BatchQueue;

impl BatchEmitter {
    pub fn new(queue: Arc<dyn BatchQueue>, peer_queue: &str, history_queue: &str) -> BatchEmitter {
        BatchEmitter {
            queue,
            peer_queue: peer_queue.to_string(),
            history_queue: history_queue.to_string(),
        }
    }

    pub fn peer_queue(&self) -> &str {
        &self.peer_queue
    }

    pub fn history_queue(&self) -> &str {
        &self.history_queue
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn emit(&self, peer: &PeerBatchRecord, history: &HistoryBatchRecord) -> Result<(), QueueError> {
        self.queue.push(&self.peer_queue, serde_json::to_string(peer)?).await?;
        self.queue.push(&self.history_queue, serde_json::to_string(history)?).await?;
        debug!("[EMIT] Peer {} of user {} on torrent {} queued", peer.peer_id, peer.user_id, peer.torrent_id);
        Ok(())
    }
}
