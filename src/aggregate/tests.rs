#[cfg(test)]
mod aggregate_tests {
    use std::sync::Arc;
    use async_trait::async_trait;
    use mockall::mock;
    use mockall::predicate::eq;
    use crate::aggregate::structs::aggregate_outcome::AggregateOutcome;
    use crate::aggregate::structs::aggregate_updater::AggregateUpdater;
    use crate::announce::enums::announce_event::AnnounceEvent;
    use crate::credit::structs::credited_deltas::CreditedDeltas;
    use crate::database::errors::DatabaseError;
    use crate::database::traits::torrent_repository::TorrentRepository;
    use crate::database::traits::user_repository::UserRepository;
    use crate::swarm::structs::swarm_deltas::SwarmDeltas;

    mock! {
        pub Users {}
        #[async_trait]
        impl UserRepository for Users {
            async fn increment_aggregates(&self, user_id: u64, uploaded: u64, downloaded: u64) -> Result<(), DatabaseError>;
        }
    }

    mock! {
        pub Torrents {}
        #[async_trait]
        impl TorrentRepository for Torrents {
            async fn increment_aggregates(&self, torrent_id: u64, seeders: i64, leechers: i64, times_completed: u64) -> Result<(), DatabaseError>;
        }
    }

    fn updater(users: MockUsers, torrents: MockTorrents) -> AggregateUpdater {
        AggregateUpdater::new(Arc::new(users), Arc::new(torrents))
    }

    #[tokio::test]
    async fn test_zero_deltas_issue_no_increments() {
        let mut users = MockUsers::new();
        users.expect_increment_aggregates().never();
        let mut torrents = MockTorrents::new();
        torrents.expect_increment_aggregates().never();
        let outcome = updater(users, torrents)
            .apply(1, 2, AnnounceEvent::None, &CreditedDeltas::default(), &SwarmDeltas::default())
            .await
            .unwrap();
        assert_eq!(outcome, AggregateOutcome::default());
    }

    #[tokio::test]
    async fn test_nonzero_deltas_are_applied() {
        let mut users = MockUsers::new();
        users.expect_increment_aggregates()
            .with(eq(1), eq(1000), eq(0))
            .times(1)
            .returning(|_, _, _| Ok(()));
        let mut torrents = MockTorrents::new();
        torrents.expect_increment_aggregates()
            .with(eq(2), eq(1), eq(-1), eq(0))
            .times(1)
            .returning(|_, _, _, _| Ok(()));
        let credited = CreditedDeltas { uploaded: 1000, downloaded: 0 };
        let swarm = SwarmDeltas { seeders: 1, leechers: -1, times_completed: 0 };
        let outcome = updater(users, torrents)
            .apply(1, 2, AnnounceEvent::None, &credited, &swarm)
            .await
            .unwrap();
        assert_eq!(outcome, AggregateOutcome { user_updated: true, torrent_updated: true });
    }

    #[tokio::test]
    async fn test_stopped_announce_does_not_credit_user() {
        let mut users = MockUsers::new();
        users.expect_increment_aggregates().never();
        let mut torrents = MockTorrents::new();
        torrents.expect_increment_aggregates()
            .with(eq(2), eq(-1), eq(0), eq(0))
            .times(1)
            .returning(|_, _, _, _| Ok(()));
        let credited = CreditedDeltas { uploaded: 10, downloaded: 10 };
        let swarm = SwarmDeltas { seeders: -1, leechers: 0, times_completed: 0 };
        let outcome = updater(users, torrents)
            .apply(1, 2, AnnounceEvent::Stopped, &credited, &swarm)
            .await
            .unwrap();
        assert!(!outcome.user_updated);
        assert!(outcome.torrent_updated);
    }

    #[tokio::test]
    async fn test_repository_failure_propagates() {
        let mut users = MockUsers::new();
        users.expect_increment_aggregates()
            .returning(|_, _, _| Err(DatabaseError::NotConnected(String::from("down"))));
        let mut torrents = MockTorrents::new();
        torrents.expect_increment_aggregates().never();
        let credited = CreditedDeltas { uploaded: 1, downloaded: 0 };
        let result = updater(users, torrents)
            .apply(1, 2, AnnounceEvent::None, &credited, &SwarmDeltas { seeders: 1, leechers: 0, times_completed: 0 })
            .await;
        assert!(result.is_err());
    }
}
