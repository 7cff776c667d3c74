use crate::config::structs::database_structure_config::DatabaseStructureConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::errors::DatabaseError;
use crate::database::helpers::{
    build_create_table_queries, build_find_peer_query, build_freeleech_token_query,
    build_increment_torrent_query, build_increment_user_query, build_personal_freeleech_query,
    build_upsert_peer_query, from_i64, to_i64,
};
use crate::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
use crate::peer::structs::peer::Peer;
use crate::peer::structs::peer_id::PeerId;
use log::{debug, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{ConnectOptions, Pool, Row, Sqlite};
use std::str::FromStr;
use std::time::Duration;

const ENGINE: DatabaseDrivers = DatabaseDrivers::sqlite3;
const LOG_PREFIX: &str = "[SQLite]";

impl DatabaseConnectorSQLite {
    #[tracing::instrument(level = "debug")]
    pub async fn create(dsl: &str, max_connections: u32) -> Result<Pool<Sqlite>, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(dsl)?
            .create_if_missing(true)
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1));
        SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
    }

    pub async fn connect(dsl: &str, max_connections: u32, structure: DatabaseStructureConfig) -> Result<DatabaseConnectorSQLite, DatabaseError> {
        let pool = DatabaseConnectorSQLite::create(dsl, max_connections).await?;
        info!("{} Connected with a pool of {} connections", LOG_PREFIX, max_connections);
        Ok(DatabaseConnectorSQLite { pool, structure })
    }

    pub async fn create_tables(&self) -> Result<(), DatabaseError> {
        for query in build_create_table_queries(ENGINE, &self.structure) {
            debug!("{} {}", LOG_PREFIX, query);
            sqlx::query(&query).execute(&self.pool).await?;
        }
        info!("{} Tables created (or already present)", LOG_PREFIX);
        Ok(())
    }

    pub async fn increment_user(&self, user_id: u64, uploaded: u64, downloaded: u64) -> Result<(), DatabaseError> {
        let query = build_increment_user_query(ENGINE, &self.structure);
        sqlx::query(&query)
            .bind(to_i64(uploaded))
            .bind(to_i64(downloaded))
            .bind(to_i64(user_id))
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn increment_torrent(&self, torrent_id: u64, seeders: i64, leechers: i64, times_completed: u64) -> Result<(), DatabaseError> {
        let query = build_increment_torrent_query(ENGINE, &self.structure);
        sqlx::query(&query)
            .bind(seeders.saturating_neg())
            .bind(seeders)
            .bind(leechers.saturating_neg())
            .bind(leechers)
            .bind(to_i64(times_completed))
            .bind(to_i64(torrent_id))
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn personal_freeleech_exists(&self, user_id: u64) -> Result<bool, DatabaseError> {
        let query = build_personal_freeleech_query(ENGINE, &self.structure);
        let row = sqlx::query(&query)
            .bind(to_i64(user_id))
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    pub async fn freeleech_token_exists(&self, user_id: u64, torrent_id: u64) -> Result<bool, DatabaseError> {
        let query = build_freeleech_token_query(ENGINE, &self.structure);
        let row = sqlx::query(&query)
            .bind(to_i64(user_id))
            .bind(to_i64(torrent_id))
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    pub async fn find_peer(&self, peer_id: &PeerId, user_id: u64, torrent_id: u64) -> Result<Option<Peer>, DatabaseError> {
        let query = build_find_peer_query(ENGINE, &self.structure);
        let row = sqlx::query(&query)
            .bind(peer_id.as_bytes())
            .bind(to_i64(user_id))
            .bind(to_i64(torrent_id))
            .fetch_optional(&self.pool)
            .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        Ok(Some(Peer {
            peer_id: peer_id.clone(),
            user_id,
            torrent_id,
            uploaded: from_i64(row.try_get(0)?),
            downloaded: from_i64(row.try_get(1)?),
            left: from_i64(row.try_get(2)?),
            connectable: row.try_get::<i64, _>(3)? != 0,
            active: row.try_get::<i64, _>(4)? != 0,
        }))
    }

    pub async fn upsert_peer(&self, peer: &Peer) -> Result<(), DatabaseError> {
        let query = build_upsert_peer_query(ENGINE, &self.structure);
        sqlx::query(&query)
            .bind(peer.peer_id.as_bytes())
            .bind(to_i64(peer.user_id))
            .bind(to_i64(peer.torrent_id))
            .bind(to_i64(peer.uploaded))
            .bind(to_i64(peer.downloaded))
            .bind(to_i64(peer.left))
            .bind(i64::from(peer.connectable))
            .bind(i64::from(peer.active))
            .execute(&self.pool)
            .await?;
        debug!("{} Stored peer {} of user {} on torrent {}", LOG_PREFIX, peer.peer_id, peer.user_id, peer.torrent_id);
        Ok(())
    }
}
