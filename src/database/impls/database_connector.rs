use crate::config::structs::configuration::Configuration;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::errors::DatabaseError;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::database_connector_mysql::DatabaseConnectorMySQL;
use crate::database::structs::database_connector_pgsql::DatabaseConnectorPgSQL;
use crate::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
use crate::database::traits::freeleech_repository::FreeleechRepository;
use crate::database::traits::peer_repository::PeerRepository;
use crate::database::traits::torrent_repository::TorrentRepository;
use crate::database::traits::user_repository::UserRepository;
use crate::peer::structs::peer::Peer;
use crate::peer::structs::peer_id::PeerId;
use async_trait::async_trait;
use log::{error, info};

impl DatabaseConnector {
    #[tracing::instrument(level = "debug", skip(config))]
    pub async fn new(config: &Configuration, create_database: bool) -> Result<DatabaseConnector, DatabaseError> {
        let transaction = crate::utils::sentry_tracing::start_trace_transaction("database_init", "database");
        let engine = config.database.engine;
        let dsl = config.database.path.as_str();
        let max_connections = config.database.max_connections;
        let structure = config.database_structure.clone();
        let mut connector = DatabaseConnector {
            mysql: None,
            sqlite: None,
            pgsql: None,
            engine: Some(engine),
        };
        let result = match engine {
            DatabaseDrivers::sqlite3 => DatabaseConnectorSQLite::connect(dsl, max_connections, structure).await
                .map(|c| connector.sqlite = Some(c)),
            DatabaseDrivers::mysql => DatabaseConnectorMySQL::connect(dsl, max_connections, structure).await
                .map(|c| connector.mysql = Some(c)),
            DatabaseDrivers::pgsql => DatabaseConnectorPgSQL::connect(dsl, max_connections, structure).await
                .map(|c| connector.pgsql = Some(c)),
        };
        crate::utils::sentry_tracing::finish_trace_transaction(transaction, &result, &[("engine", engine.to_string())]);
        if let Err(e) = result {
            error!("[Database] Unable to connect to {} on {}: {}", engine, dsl, e);
            return Err(e);
        }
        if create_database {
            info!("[BOOT] Database creation triggered for {}", engine);
            connector.create_tables().await?;
        }
        Ok(connector)
    }

    pub fn engine(&self) -> Option<DatabaseDrivers> {
        self.engine
    }

    pub async fn create_tables(&self) -> Result<(), DatabaseError> {
        match self.engine {
            Some(DatabaseDrivers::sqlite3) => self.sqlite()?.create_tables().await,
            Some(DatabaseDrivers::mysql) => self.mysql()?.create_tables().await,
            Some(DatabaseDrivers::pgsql) => self.pgsql()?.create_tables().await,
            None => Err(DatabaseError::NotConnected(String::from("No database engine configured"))),
        }
    }

    fn sqlite(&self) -> Result<&DatabaseConnectorSQLite, DatabaseError> {
        self.sqlite.as_ref().ok_or_else(|| DatabaseError::NotConnected(String::from("SQLite not connected")))
    }

    fn mysql(&self) -> Result<&DatabaseConnectorMySQL, DatabaseError> {
        self.mysql.as_ref().ok_or_else(|| DatabaseError::NotConnected(String::from("MySQL not connected")))
    }

    fn pgsql(&self) -> Result<&DatabaseConnectorPgSQL, DatabaseError> {
        self.pgsql.as_ref().ok_or_else(|| DatabaseError::NotConnected(String::from("PgSQL not connected")))
    }
}

#[async_trait]
impl UserRepository for DatabaseConnector {
    async fn increment_aggregates(&self, user_id: u64, uploaded: u64, downloaded: u64) -> Result<(), DatabaseError> {
        match self.engine {
            Some(DatabaseDrivers::sqlite3) => self.sqlite()?.increment_user(user_id, uploaded, downloaded).await,
            Some(DatabaseDrivers::mysql) => self.mysql()?.increment_user(user_id, uploaded, downloaded).await,
            Some(DatabaseDrivers::pgsql) => self.pgsql()?.increment_user(user_id, uploaded, downloaded).await,
            None => Err(DatabaseError::NotConnected(String::from("No database engine configured"))),
        }
    }
}

#[async_trait]
impl TorrentRepository for DatabaseConnector {
    async fn increment_aggregates(&self, torrent_id: u64, seeders: i64, leechers: i64, times_completed: u64) -> Result<(), DatabaseError> {
        match self.engine {
            Some(DatabaseDrivers::sqlite3) => self.sqlite()?.increment_torrent(torrent_id, seeders, leechers, times_completed).await,
            Some(DatabaseDrivers::mysql) => self.mysql()?.increment_torrent(torrent_id, seeders, leechers, times_completed).await,
            Some(DatabaseDrivers::pgsql) => self.pgsql()?.increment_torrent(torrent_id, seeders, leechers, times_completed).await,
            None => Err(DatabaseError::NotConnected(String::from("No database engine configured"))),
        }
    }
}

#[async_trait]
impl FreeleechRepository for DatabaseConnector {
    async fn personal_freeleech_exists(&self, user_id: u64) -> Result<bool, DatabaseError> {
        match self.engine {
            Some(DatabaseDrivers::sqlite3) => self.sqlite()?.personal_freeleech_exists(user_id).await,
            Some(DatabaseDrivers::mysql) => self.mysql()?.personal_freeleech_exists(user_id).await,
            Some(DatabaseDrivers::pgsql) => self.pgsql()?.personal_freeleech_exists(user_id).await,
            None => Err(DatabaseError::NotConnected(String::from("No database engine configured"))),
        }
    }

    async fn freeleech_token_exists(&self, user_id: u64, torrent_id: u64) -> Result<bool, DatabaseError> {
        match self.engine {
            Some(DatabaseDrivers::sqlite3) => self.sqlite()?.freeleech_token_exists(user_id, torrent_id).await,
            Some(DatabaseDrivers::mysql) => self.mysql()?.freeleech_token_exists(user_id, torrent_id).await,
            Some(DatabaseDrivers::pgsql) => self.pgsql()?.freeleech_token_exists(user_id, torrent_id).await,
            None => Err(DatabaseError::NotConnected(String::from("No database engine configured"))),
        }
    }
}

#[async_trait]
impl PeerRepository for DatabaseConnector {
    async fn find(&self, peer_id: &PeerId, user_id: u64, torrent_id: u64) -> Result<Option<Peer>, DatabaseError> {
        match self.engine {
            Some(DatabaseDrivers::sqlite3) => self.sqlite()?.find_peer(peer_id, user_id, torrent_id).await,
            Some(DatabaseDrivers::mysql) => self.mysql()?.find_peer(peer_id, user_id, torrent_id).await,
            Some(DatabaseDrivers::pgsql) => self.pgsql()?.find_peer(peer_id, user_id, torrent_id).await,
            None => Err(DatabaseError::NotConnected(String::from("No database engine configured"))),
        }
    }

    async fn upsert(&self, peer: &Peer) -> Result<(), DatabaseError> {
        match self.engine {
            Some(DatabaseDrivers::sqlite3) => self.sqlite()?.upsert_peer(peer).await,
            Some(DatabaseDrivers::mysql) => self.mysql()?.upsert_peer(peer).await,
            Some(DatabaseDrivers::pgsql) => self.pgsql()?.upsert_peer(peer).await,
            None => Err(DatabaseError::NotConnected(String::from("No database engine configured"))),
        }
    }
}
