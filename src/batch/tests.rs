#[cfg(test)]
mod batch_tests {
    use std::sync::Arc;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use crate::announce::enums::announce_event::AnnounceEvent;
    use crate::announce::structs::announce_request::AnnounceRequest;
    use crate::batch::errors::QueueError;
    use crate::batch::structs::batch_emitter::BatchEmitter;
    use crate::batch::structs::history_batch_record::HistoryBatchRecord;
    use crate::batch::structs::memory_queue::MemoryQueue;
    use crate::batch::structs::peer_batch_record::PeerBatchRecord;
    use crate::batch::traits::batch_queue::BatchQueue;
    use crate::credit::structs::credited_deltas::CreditedDeltas;
    use crate::peer::structs::peer::Peer;
    use crate::peer::structs::peer_id::PeerId;
    use crate::peer::structs::peer_state::PeerState;

    fn request(event: AnnounceEvent, left: u64) -> AnnounceRequest {
        AnnounceRequest {
            event,
            peer_id: PeerId(b"-UT3600-abcdefghijkl".to_vec()),
            ip: vec![10, 0, 0, 1],
            port: 6881,
            uploaded: 5000,
            downloaded: 3000,
            left,
            agent: "x".repeat(100),
        }
    }

    fn state(event: AnnounceEvent) -> PeerState {
        PeerState {
            is_new_peer: false,
            was_active: true,
            event,
            previous_left: 10,
            uploaded_delta: 500,
            downloaded_delta: 300,
        }
    }

    struct DownQueue;

    #[async_trait]
    impl BatchQueue for DownQueue {
        async fn push(&self, _queue: &str, _payload: String) -> Result<(), QueueError> {
            Err(QueueError::ConnectionError(String::from("queue offline")))
        }
    }

    mod record_tests {
        use super::*;

        #[test]
        fn test_peer_record_fields() {
            let record = PeerBatchRecord::new(&request(AnnounceEvent::Stopped, 0), &state(AnnounceEvent::Stopped), 7, 9, true);
            assert!(record.seeder);
            assert!(!record.active);
            assert!(record.connectable);
            assert_eq!(record.agent.len(), 64);
            assert_eq!((record.user_id, record.torrent_id), (7, 9));
        }

        #[test]
        fn test_peer_record_json_encodes_bytes_as_base64() {
            let record = PeerBatchRecord::new(&request(AnnounceEvent::None, 1), &state(AnnounceEvent::None), 7, 9, false);
            let json: serde_json::Value = serde_json::to_value(&record).unwrap();
            assert_eq!(json["ip"], "CgAAAQ==");
            assert_eq!(json["peer_id"], "LVVUMzYwMC1hYmNkZWZnaGlqa2w=");
            assert_eq!(json["active"], true);
        }

        #[test]
        fn test_peer_rebuilt_from_record() {
            let record = PeerBatchRecord::new(&request(AnnounceEvent::None, 1), &state(AnnounceEvent::None), 7, 9, false);
            let peer = Peer::from(&record);
            assert_eq!((&peer.peer_id, peer.user_id, peer.torrent_id), (&record.peer_id, 7, 9));
            assert_eq!(peer.uploaded, 5000);
            assert!(peer.active);
        }

        #[test]
        fn test_history_record_separates_credited_raw_and_reported() {
            let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
            let credited = CreditedDeltas { uploaded: 1000, downloaded: 0 };
            let record = HistoryBatchRecord::new(&request(AnnounceEvent::None, 0), &state(AnnounceEvent::None), &credited, 7, 9, true, now);
            assert_eq!((record.uploaded, record.downloaded), (1000, 0));
            assert_eq!((record.actual_uploaded, record.actual_downloaded), (500, 300));
            assert_eq!((record.client_uploaded, record.client_downloaded), (5000, 3000));
            assert_eq!(record.seedtime, 0);
            assert!(record.immune);
            assert!(record.completed_at.is_none());
        }

        #[test]
        fn test_history_record_completed_at() {
            let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
            let record = HistoryBatchRecord::new(
                &request(AnnounceEvent::Completed, 0),
                &state(AnnounceEvent::Completed),
                &CreditedDeltas::default(),
                7,
                9,
                false,
                now,
            );
            assert_eq!(record.completed_at, Some(now));
            let json = serde_json::to_value(&record).unwrap();
            assert_eq!(json["completed_at"], "2024-05-01T12:00:00Z");
        }
    }

    mod emitter_tests {
        use super::*;

        #[tokio::test]
        async fn test_emit_pushes_to_both_queues() {
            let queue = MemoryQueue::new();
            let emitter = BatchEmitter::new(Arc::new(queue.clone()), "peers", "history");
            let request = request(AnnounceEvent::None, 0);
            let state = state(AnnounceEvent::None);
            let peer = PeerBatchRecord::new(&request, &state, 1, 2, false);
            let history = HistoryBatchRecord::new(&request, &state, &CreditedDeltas::default(), 1, 2, false, Utc::now());
            emitter.emit(&peer, &history).await.unwrap();
            emitter.emit(&peer, &history).await.unwrap();
            assert_eq!(queue.len("peers"), 2);
            assert_eq!(queue.len("history"), 2);
            let pushed: PeerBatchRecord = serde_json::from_str(&queue.drain("peers")[0]).unwrap();
            assert_eq!(pushed, peer);
            assert!(queue.is_empty("peers"));
        }

        #[tokio::test]
        async fn test_emit_surfaces_queue_failure() {
            let emitter = BatchEmitter::new(Arc::new(DownQueue), "peers", "history");
            let request = request(AnnounceEvent::None, 0);
            let state = state(AnnounceEvent::None);
            let peer = PeerBatchRecord::new(&request, &state, 1, 2, false);
            let history = HistoryBatchRecord::new(&request, &state, &CreditedDeltas::default(), 1, 2, false, Utc::now());
            let result = emitter.emit(&peer, &history).await;
            assert!(matches!(result, Err(QueueError::ConnectionError(_))));
        }
    }
}
