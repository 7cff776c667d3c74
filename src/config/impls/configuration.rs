use std::fs::File;
use std::io::Write;
use std::thread::available_parallelism;
use regex::Regex;
use crate::cache::enums::cache_engine::CacheEngine;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::backend_engine::BackendEngine;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::announce_config::AnnounceConfig;
use crate::config::structs::cache_config::CacheConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::database_config::DatabaseConfig;
use crate::config::structs::database_structure_config::DatabaseStructureConfig;
use crate::config::structs::database_structure_config_freeleech_tokens::DatabaseStructureConfigFreeleechTokens;
use crate::config::structs::database_structure_config_peers::DatabaseStructureConfigPeers;
use crate::config::structs::database_structure_config_personal_freeleech::DatabaseStructureConfigPersonalFreeleech;
use crate::config::structs::database_structure_config_torrents::DatabaseStructureConfigTorrents;
use crate::config::structs::database_structure_config_users::DatabaseStructureConfigUsers;
use crate::config::structs::lease_config::LeaseConfig;
use crate::config::structs::queue_config::QueueConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;

const IDENTIFIER_PATTERN: &str = r"^[a-z_][a-z0-9_]{0,30}$";
const QUEUE_NAME_PATTERN: &str = r"^[A-Za-z0-9_:\-]{1,64}$";

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            announce: AnnounceConfig {
                global_freeleech: false,
                global_double_upload: false,
                lease_ttl: 30,
                retry_delay: 30,
                max_attempts: 5,
                workers: available_parallelism().map(|n| n.get()).unwrap_or(4) * 4,
                job_queue: String::from("announce_jobs"),
                peer_queue: String::from("peers"),
                history_queue: String::from("history"),
                connectable_check: false,
                connectable_check_interval: 7200,
                connectable_check_timeout: 1000,
            },
            cache: CacheConfig {
                enabled: false,
                engine: CacheEngine::redis,
                address: String::from("127.0.0.1:6379"),
                prefix: String::from("ledger:"),
            },
            lease: LeaseConfig {
                engine: BackendEngine::memory,
                address: String::from("127.0.0.1:6379"),
                prefix: String::from("ledger:lease:"),
            },
            queue: QueueConfig {
                engine: BackendEngine::memory,
                address: String::from("127.0.0.1:6379"),
                prefix: String::from("ledger:queue:"),
            },
            database: DatabaseConfig {
                enabled: false,
                engine: DatabaseDrivers::sqlite3,
                path: String::from("sqlite://data.db"),
                max_connections: 10,
            },
            database_structure: DatabaseStructureConfig {
                users: DatabaseStructureConfigUsers {
                    table_name: String::from("users"),
                    column_id: String::from("id"),
                    column_uploaded: String::from("uploaded"),
                    column_downloaded: String::from("downloaded"),
                },
                torrents: DatabaseStructureConfigTorrents {
                    table_name: String::from("torrents"),
                    column_id: String::from("id"),
                    column_seeders: String::from("seeders"),
                    column_leechers: String::from("leechers"),
                    column_times_completed: String::from("times_completed"),
                },
                peers: DatabaseStructureConfigPeers {
                    table_name: String::from("peers"),
                    column_peer_id: String::from("peer_id"),
                    column_user_id: String::from("user_id"),
                    column_torrent_id: String::from("torrent_id"),
                    column_uploaded: String::from("uploaded"),
                    column_downloaded: String::from("downloaded"),
                    column_left: String::from("left"),
                    column_connectable: String::from("connectable"),
                    column_active: String::from("active"),
                },
                personal_freeleech: DatabaseStructureConfigPersonalFreeleech {
                    table_name: String::from("personal_freeleeches"),
                    column_user_id: String::from("user_id"),
                },
                freeleech_tokens: DatabaseStructureConfigFreeleechTokens {
                    table_name: String::from("freeleech_tokens"),
                    column_user_id: String::from("user_id"),
                    column_torrent_id: String::from("torrent_id"),
                },
            },
            sentry_config: SentryConfig {
                enabled: false,
                dsn: String::new(),
                debug: false,
                sample_rate: 1.0,
                max_breadcrumbs: 100,
                attach_stacktrace: true,
                send_default_pii: false,
                traces_sample_rate: 1.0,
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => Self::load(data.as_slice()).map_err(ConfigurationError::ParseError)
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path).map_err(ConfigurationError::IOError)?;
        file.write_all(data.as_ref()).map_err(ConfigurationError::IOError)
    }

    pub fn save_from_config(path: &str, config: &Configuration) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new(&format!("will not create automatically {path} file")));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(path, &Configuration::init()) {
                    Ok(_) => {
                        eprintln!("Please edit {path} and start again, exiting now...");
                        Err(CustomError::new(&format!("created {path} file")))
                    }
                    Err(e) => {
                        eprintln!("{path} file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {path} file")))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        if let Err(error) = config.validate() {
            eprintln!("[VALIDATE] {error}");
            return Err(CustomError::new(&error.to_string()));
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let identifier = Regex::new(IDENTIFIER_PATTERN).map_err(|e| ConfigurationError::ValidationError(vec![e.to_string()]))?;
        let queue_name = Regex::new(QUEUE_NAME_PATTERN).map_err(|e| ConfigurationError::ValidationError(vec![e.to_string()]))?;
        let structure = &self.database_structure;

        let identifier_checks = [
            ("[DB: users]", &structure.users.table_name),
            ("[DB: users] Column: id", &structure.users.column_id),
            ("[DB: users] Column: uploaded", &structure.users.column_uploaded),
            ("[DB: users] Column: downloaded", &structure.users.column_downloaded),
            ("[DB: torrents]", &structure.torrents.table_name),
            ("[DB: torrents] Column: id", &structure.torrents.column_id),
            ("[DB: torrents] Column: seeders", &structure.torrents.column_seeders),
            ("[DB: torrents] Column: leechers", &structure.torrents.column_leechers),
            ("[DB: torrents] Column: times_completed", &structure.torrents.column_times_completed),
            ("[DB: peers]", &structure.peers.table_name),
            ("[DB: peers] Column: peer_id", &structure.peers.column_peer_id),
            ("[DB: peers] Column: user_id", &structure.peers.column_user_id),
            ("[DB: peers] Column: torrent_id", &structure.peers.column_torrent_id),
            ("[DB: peers] Column: uploaded", &structure.peers.column_uploaded),
            ("[DB: peers] Column: downloaded", &structure.peers.column_downloaded),
            ("[DB: peers] Column: left", &structure.peers.column_left),
            ("[DB: peers] Column: connectable", &structure.peers.column_connectable),
            ("[DB: peers] Column: active", &structure.peers.column_active),
            ("[DB: personal_freeleech]", &structure.personal_freeleech.table_name),
            ("[DB: personal_freeleech] Column: user_id", &structure.personal_freeleech.column_user_id),
            ("[DB: freeleech_tokens]", &structure.freeleech_tokens.table_name),
            ("[DB: freeleech_tokens] Column: user_id", &structure.freeleech_tokens.column_user_id),
            ("[DB: freeleech_tokens] Column: torrent_id", &structure.freeleech_tokens.column_torrent_id),
        ];
        let queue_checks = [
            ("[Announce] job_queue", &self.announce.job_queue),
            ("[Announce] peer_queue", &self.announce.peer_queue),
            ("[Announce] history_queue", &self.announce.history_queue),
        ];

        let mut errors = Vec::new();
        for (name, value) in identifier_checks {
            if !identifier.is_match(value) {
                errors.push(format!("{name} '{value}' does not match {IDENTIFIER_PATTERN}"));
            }
        }
        for (name, value) in queue_checks {
            if !queue_name.is_match(value) {
                errors.push(format!("{name} '{value}' does not match {QUEUE_NAME_PATTERN}"));
            }
        }
        if self.announce.lease_ttl == 0 {
            errors.push(String::from("[Announce] lease_ttl must be greater than 0"));
        }
        if self.announce.workers == 0 {
            errors.push(String::from("[Announce] workers must be greater than 0"));
        }
        if self.announce.max_attempts == 0 {
            errors.push(String::from("[Announce] max_attempts must be greater than 0"));
        }
        if self.database.enabled && self.database.max_connections == 0 {
            errors.push(String::from("[DB] max_connections must be greater than 0"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigurationError::ValidationError(errors))
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::init()
    }
}
