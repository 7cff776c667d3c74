#[cfg(test)]
mod worker_tests {
    use std::sync::Arc;
    use std::time::Duration;
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use crate::announce::structs::raw_announce::RawAnnounce;
    use crate::config::structs::configuration::Configuration;
    use crate::guard::structs::serialization_guard::SerializationGuard;
    use crate::guard::traits::lease_backend::LeaseBackend;
    use crate::processor::structs::announce_processor::AnnounceProcessor;
    use crate::stats::structs::stats_atomics::StatsAtomics;
    use crate::tracker::structs::group_entry::GroupEntry;
    use crate::tracker::structs::torrent_entry::TorrentEntry;
    use crate::tracker::structs::user_entry::UserEntry;
    use crate::worker::enums::job_decision::JobDecision;
    use crate::worker::structs::announce_job::AnnounceJob;
    use crate::worker::structs::announce_worker::AnnounceWorker;
    use crate::worker::structs::memory_job_queue::MemoryJobQueue;
    use crate::worker::traits::job_queue::JobQueue;

    fn job(peer: u8) -> AnnounceJob {
        AnnounceJob {
            announce: RawAnnounce {
                event: Some(String::from("started")),
                peer_id: STANDARD.encode([peer; 20]),
                ip: STANDARD.encode([127, 0, 0, 1]),
                port: Some(String::from("6881")),
                uploaded: Some(String::from("0")),
                downloaded: Some(String::from("0")),
                left: Some(String::from("100")),
                agent: String::from("Transmission/4.0.5"),
            },
            user: UserEntry { id: u64::from(peer), uploaded: 0, downloaded: 0 },
            group: GroupEntry::default(),
            torrent: TorrentEntry::new(2),
            attempts: 0,
        }
    }

    async fn worker(max_attempts: u32) -> (AnnounceWorker, MemoryJobQueue) {
        let mut config = Configuration::init();
        config.announce.retry_delay = 0;
        config.announce.max_attempts = max_attempts;
        config.announce.workers = 2;
        let processor = AnnounceProcessor::from_config(&config, false, Arc::new(StatsAtomics::new())).await.unwrap();
        let jobs = MemoryJobQueue::new();
        let worker = AnnounceWorker::new(processor, Arc::new(jobs.clone()), &config.announce)
            .with_poll_timeout(Duration::from_millis(20));
        (worker, jobs)
    }

    #[test]
    fn test_job_json_defaults() {
        let original = job(1);
        let mut value = serde_json::to_value(&original).unwrap();
        let object = value.as_object_mut().unwrap();
        object.remove("attempts");
        object.remove("group");
        let decoded = AnnounceJob::from_json(&value.to_string()).unwrap();
        assert_eq!(decoded, original);
        assert!(AnnounceJob::from_json("{}").is_err());
    }

    #[tokio::test]
    async fn test_memory_job_queue_fifo_and_timeout() {
        let jobs = MemoryJobQueue::new();
        jobs.push(&job(1)).await.unwrap();
        jobs.push(&job(2)).await.unwrap();
        assert_eq!(jobs.pop(Duration::from_millis(10)).await.unwrap(), Some(job(1)));
        assert_eq!(jobs.pop(Duration::from_millis(10)).await.unwrap(), Some(job(2)));
        assert_eq!(jobs.pop(Duration::from_millis(10)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_contended_job_is_requeued() {
        let (worker, jobs) = worker(3).await;
        worker.processor.guard.backend
            .acquire(&SerializationGuard::lease_key(1, 2), Duration::from_secs(30))
            .await
            .unwrap();
        let decision = worker.process_job(job(1)).await;
        let JobDecision::Requeue(retry) = decision else {
            panic!("expected a requeue, got {:?}", decision);
        };
        assert_eq!(retry.attempts, 1);
        worker.requeue(retry).await;
        let popped = jobs.pop(Duration::from_millis(10)).await.unwrap().unwrap();
        assert_eq!(popped.attempts, 1);
        assert_eq!(worker.processor.stats.get_stats().jobs_requeued, 1);
    }

    #[tokio::test]
    async fn test_exhausted_job_is_dropped() {
        let (worker, _jobs) = worker(2).await;
        worker.processor.guard.backend
            .acquire(&SerializationGuard::lease_key(1, 2), Duration::from_secs(30))
            .await
            .unwrap();
        let mut last_try = job(1);
        last_try.attempts = 1;
        assert_eq!(worker.process_job(last_try).await, JobDecision::Drop);
        assert_eq!(worker.processor.stats.get_stats().jobs_dropped, 1);
    }

    #[tokio::test]
    async fn test_malformed_job_is_dropped_without_retry() {
        let (worker, _jobs) = worker(5).await;
        let mut bad = job(1);
        bad.announce.left = None;
        assert_eq!(worker.process_job(bad).await, JobDecision::Drop);
    }

    #[tokio::test]
    async fn test_run_processes_until_shutdown() {
        let (worker, jobs) = worker(5).await;
        for peer in 1..=3 {
            jobs.push(&job(peer)).await.unwrap();
        }
        let (stop, stopped) = tokio::sync::oneshot::channel::<()>();
        let running = {
            let worker = worker.clone();
            tokio::spawn(async move {
                worker.run(async move {
                    let _ = stopped.await;
                }).await;
            })
        };
        for _ in 0..100 {
            if worker.processor.stats.get_stats().announces_processed >= 3 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        let _ = stop.send(());
        running.await.unwrap();
        assert_eq!(worker.processor.stats.get_stats().announces_processed, 3);
    }
}
