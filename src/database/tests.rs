#[cfg(test)]
mod database_tests {
    use crate::config::structs::configuration::Configuration;
    use crate::database::enums::database_drivers::DatabaseDrivers;
    use crate::database::helpers;

    mod helpers_tests {
        use super::*;

        #[test]
        fn test_quote_identifier_per_driver() {
            assert_eq!(helpers::quote_identifier(DatabaseDrivers::sqlite3, "users"), "`users`");
            assert_eq!(helpers::quote_identifier(DatabaseDrivers::mysql, "users"), "`users`");
            assert_eq!(helpers::quote_identifier(DatabaseDrivers::pgsql, "users"), "\"users\"");
        }

        #[test]
        fn test_placeholders_numbered_for_pgsql() {
            let mut p = helpers::Placeholders::new(DatabaseDrivers::pgsql);
            assert_eq!(p.next(), "$1");
            assert_eq!(p.next(), "$2");
            let mut p = helpers::Placeholders::new(DatabaseDrivers::mysql);
            assert_eq!(p.next(), "?");
            assert_eq!(p.next(), "?");
        }

        #[test]
        fn test_increment_user_query_is_relative() {
            let config = Configuration::init();
            let query = helpers::build_increment_user_query(DatabaseDrivers::mysql, &config.database_structure);
            assert_eq!(
                query,
                "UPDATE `users` SET `uploaded` = `uploaded` + ?, `downloaded` = `downloaded` + ? WHERE `id` = ?"
            );
        }

        #[test]
        fn test_increment_torrent_query_saturates() {
            let config = Configuration::init();
            let query = helpers::build_increment_torrent_query(DatabaseDrivers::pgsql, &config.database_structure);
            assert!(query.contains("\"seeders\" = CASE WHEN \"seeders\" < $1 THEN 0 ELSE \"seeders\" + $2 END"));
            assert!(query.contains("\"leechers\" = CASE WHEN \"leechers\" < $3 THEN 0 ELSE \"leechers\" + $4 END"));
            assert!(query.ends_with("WHERE \"id\" = $6"));
        }

        #[test]
        fn test_existence_queries_use_configured_names() {
            let mut config = Configuration::init();
            config.database_structure.freeleech_tokens.table_name = String::from("fl_tokens");
            let query = helpers::build_freeleech_token_query(DatabaseDrivers::sqlite3, &config.database_structure);
            assert_eq!(query, "SELECT 1 FROM `fl_tokens` WHERE `user_id` = ? AND `torrent_id` = ? LIMIT 1");
            let query = helpers::build_personal_freeleech_query(DatabaseDrivers::sqlite3, &config.database_structure);
            assert_eq!(query, "SELECT 1 FROM `personal_freeleeches` WHERE `user_id` = ? LIMIT 1");
        }

        #[test]
        fn test_create_table_queries_cover_all_tables() {
            let config = Configuration::init();
            let queries = helpers::build_create_table_queries(DatabaseDrivers::sqlite3, &config.database_structure);
            assert_eq!(queries.len(), 5);
            assert!(queries.iter().all(|q| q.starts_with("CREATE TABLE IF NOT EXISTS")));
        }

        #[test]
        fn test_upsert_peer_query_per_driver() {
            let config = Configuration::init();
            let query = helpers::build_upsert_peer_query(DatabaseDrivers::mysql, &config.database_structure);
            assert!(query.starts_with("INSERT INTO `peers` (`peer_id`, `user_id`, `torrent_id`,"));
            assert!(query.ends_with("ON DUPLICATE KEY UPDATE `uploaded` = VALUES(`uploaded`), `downloaded` = VALUES(`downloaded`), `left` = VALUES(`left`), `connectable` = VALUES(`connectable`), `active` = VALUES(`active`)"));
            let query = helpers::build_upsert_peer_query(DatabaseDrivers::pgsql, &config.database_structure);
            assert!(query.contains("VALUES ($1, $2, $3, $4, $5, $6, $7, $8)"));
            assert!(query.contains("ON CONFLICT (\"peer_id\", \"user_id\", \"torrent_id\") DO UPDATE SET \"uploaded\" = excluded.\"uploaded\""));
        }

        #[test]
        fn test_to_i64_saturates() {
            assert_eq!(helpers::to_i64(42), 42);
            assert_eq!(helpers::to_i64(u64::MAX), i64::MAX);
            assert_eq!(helpers::from_i64(-5), 0);
        }
    }

    mod memory_database_tests {
        use crate::database::structs::memory_database::{MemoryDatabase, TorrentTotals};
        use crate::database::traits::freeleech_repository::FreeleechRepository;
        use crate::database::traits::peer_repository::PeerRepository;
        use crate::database::traits::torrent_repository::TorrentRepository;
        use crate::database::traits::user_repository::UserRepository;
        use crate::peer::structs::peer::Peer;
        use crate::peer::structs::peer_id::PeerId;
        use crate::tracker::structs::user_entry::UserEntry;

        fn peer(user_id: u64, uploaded: u64) -> Peer {
            Peer {
                peer_id: PeerId(b"-TR4050-bbbbbbbbbbbb".to_vec()),
                user_id,
                torrent_id: 3,
                uploaded,
                downloaded: 0,
                left: 10,
                connectable: true,
                active: true,
            }
        }

        #[tokio::test]
        async fn test_peer_rows_keyed_by_user_and_torrent() {
            let db = MemoryDatabase::new();
            db.upsert(&peer(1, 100)).await.unwrap();
            db.upsert(&peer(1, 250)).await.unwrap();
            let id = PeerId(b"-TR4050-bbbbbbbbbbbb".to_vec());
            assert_eq!(db.find(&id, 1, 3).await.unwrap().map(|p| p.uploaded), Some(250));
            assert!(db.find(&id, 2, 3).await.unwrap().is_none());
            assert!(db.find(&id, 1, 4).await.unwrap().is_none());
            assert_eq!(db.peer_count(), 1);
        }

        #[tokio::test]
        async fn test_user_increments_accumulate() {
            let db = MemoryDatabase::new();
            db.insert_user(UserEntry { id: 1, uploaded: 10, downloaded: 5 });
            UserRepository::increment_aggregates(&db, 1, 100, 50).await.unwrap();
            UserRepository::increment_aggregates(&db, 1, 1, 1).await.unwrap();
            let user = db.get_user(1).unwrap();
            assert_eq!(user.uploaded, 111);
            assert_eq!(user.downloaded, 56);
        }

        #[tokio::test]
        async fn test_missing_rows_are_untouched() {
            let db = MemoryDatabase::new();
            UserRepository::increment_aggregates(&db, 9, 100, 50).await.unwrap();
            TorrentRepository::increment_aggregates(&db, 9, 1, 1, 1).await.unwrap();
            assert!(db.get_user(9).is_none());
            assert!(db.get_torrent(9).is_none());
        }

        #[tokio::test]
        async fn test_torrent_counters_never_negative() {
            let db = MemoryDatabase::new();
            db.insert_torrent(7, TorrentTotals { seeders: 1, leechers: 0, times_completed: 3 });
            TorrentRepository::increment_aggregates(&db, 7, -1, -1, 1).await.unwrap();
            TorrentRepository::increment_aggregates(&db, 7, -1, 0, 0).await.unwrap();
            assert_eq!(
                db.get_torrent(7).unwrap(),
                TorrentTotals { seeders: 0, leechers: 0, times_completed: 4 }
            );
        }

        #[tokio::test]
        async fn test_freeleech_grants() {
            let db = MemoryDatabase::new();
            assert!(!db.personal_freeleech_exists(3).await.unwrap());
            db.grant_personal_freeleech(3);
            db.grant_freeleech_token(3, 8);
            assert!(db.personal_freeleech_exists(3).await.unwrap());
            assert!(db.freeleech_token_exists(3, 8).await.unwrap());
            assert!(!db.freeleech_token_exists(3, 9).await.unwrap());
            assert!(db.revoke_freeleech_token(3, 8));
            assert!(!db.freeleech_token_exists(3, 8).await.unwrap());
        }
    }

    mod sqlite_tests {
        use crate::config::structs::configuration::Configuration;
        use crate::database::structs::database_connector::DatabaseConnector;
        use crate::database::traits::freeleech_repository::FreeleechRepository;
        use crate::database::traits::peer_repository::PeerRepository;
        use crate::database::traits::torrent_repository::TorrentRepository;
        use crate::database::traits::user_repository::UserRepository;
        use crate::peer::structs::peer::Peer;
        use crate::peer::structs::peer_id::PeerId;
        use sqlx::Row;

        async fn connector() -> DatabaseConnector {
            let mut config = Configuration::init();
            config.database.path = String::from("sqlite::memory:");
            config.database.max_connections = 1;
            DatabaseConnector::new(&config, true).await.unwrap()
        }

        #[tokio::test]
        async fn test_sqlite_relative_updates() {
            let db = connector().await;
            let pool = &db.sqlite.as_ref().unwrap().pool;
            sqlx::query("INSERT INTO users (id, uploaded, downloaded) VALUES (1, 10, 20)").execute(pool).await.unwrap();
            sqlx::query("INSERT INTO torrents (id, seeders, leechers, times_completed) VALUES (2, 1, 0, 0)").execute(pool).await.unwrap();

            UserRepository::increment_aggregates(&db, 1, 5, 7).await.unwrap();
            TorrentRepository::increment_aggregates(&db, 2, -2, 1, 1).await.unwrap();

            let row = sqlx::query("SELECT uploaded, downloaded FROM users WHERE id = 1").fetch_one(pool).await.unwrap();
            assert_eq!(row.get::<i64, _>(0), 15);
            assert_eq!(row.get::<i64, _>(1), 27);
            let row = sqlx::query("SELECT seeders, leechers, times_completed FROM torrents WHERE id = 2").fetch_one(pool).await.unwrap();
            assert_eq!(row.get::<i64, _>(0), 0);
            assert_eq!(row.get::<i64, _>(1), 1);
            assert_eq!(row.get::<i64, _>(2), 1);
        }

        #[tokio::test]
        async fn test_sqlite_freeleech_existence() {
            let db = connector().await;
            let pool = &db.sqlite.as_ref().unwrap().pool;
            sqlx::query("INSERT INTO personal_freeleeches (user_id) VALUES (4)").execute(pool).await.unwrap();
            sqlx::query("INSERT INTO freeleech_tokens (user_id, torrent_id) VALUES (4, 11)").execute(pool).await.unwrap();
            assert!(db.personal_freeleech_exists(4).await.unwrap());
            assert!(!db.personal_freeleech_exists(5).await.unwrap());
            assert!(db.freeleech_token_exists(4, 11).await.unwrap());
            assert!(!db.freeleech_token_exists(4, 12).await.unwrap());
        }

        #[tokio::test]
        async fn test_sqlite_peer_upsert_and_find() {
            let db = connector().await;
            let id = PeerId(b"-qB4630-cccccccccccc".to_vec());
            assert!(db.find(&id, 1, 2).await.unwrap().is_none());
            let mut peer = Peer {
                peer_id: id.clone(),
                user_id: 1,
                torrent_id: 2,
                uploaded: 100,
                downloaded: 50,
                left: 900,
                connectable: true,
                active: true,
            };
            db.upsert(&peer).await.unwrap();
            peer.uploaded = 400;
            peer.left = 0;
            peer.active = false;
            db.upsert(&peer).await.unwrap();
            assert_eq!(db.find(&id, 1, 2).await.unwrap(), Some(peer));
            assert!(db.find(&id, 5, 2).await.unwrap().is_none());
        }
    }
}
