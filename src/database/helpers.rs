use crate::config::structs::database_structure_config::DatabaseStructureConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;

pub fn quote_identifier(engine: DatabaseDrivers, identifier: &str) -> String {
    match engine {
        DatabaseDrivers::sqlite3 | DatabaseDrivers::mysql => format!("`{}`", identifier),
        DatabaseDrivers::pgsql => format!("\"{}\"", identifier),
    }
}

/// Hands out bind placeholders in the style of the driver.
pub struct Placeholders {
    engine: DatabaseDrivers,
    next: usize,
}

impl Placeholders {
    pub fn new(engine: DatabaseDrivers) -> Placeholders {
        Placeholders { engine, next: 0 }
    }

    pub fn next(&mut self) -> String {
        self.next += 1;
        match self.engine {
            DatabaseDrivers::sqlite3 | DatabaseDrivers::mysql => String::from("?"),
            DatabaseDrivers::pgsql => format!("${}", self.next),
        }
    }
}

/// Binds: uploaded, downloaded, user id.
pub fn build_increment_user_query(engine: DatabaseDrivers, structure: &DatabaseStructureConfig) -> String {
    let users = &structure.users;
    let mut p = Placeholders::new(engine);
    let uploaded = quote_identifier(engine, &users.column_uploaded);
    let downloaded = quote_identifier(engine, &users.column_downloaded);
    format!(
        "UPDATE {} SET {uploaded} = {uploaded} + {}, {downloaded} = {downloaded} + {} WHERE {} = {}",
        quote_identifier(engine, &users.table_name),
        p.next(),
        p.next(),
        quote_identifier(engine, &users.column_id),
        p.next()
    )
}

/// Binds: -seeders, seeders, -leechers, leechers, times completed, torrent id.
pub fn build_increment_torrent_query(engine: DatabaseDrivers, structure: &DatabaseStructureConfig) -> String {
    let torrents = &structure.torrents;
    let mut p = Placeholders::new(engine);
    let seeders = quote_identifier(engine, &torrents.column_seeders);
    let leechers = quote_identifier(engine, &torrents.column_leechers);
    let completed = quote_identifier(engine, &torrents.column_times_completed);
    format!(
        "UPDATE {} SET {seeders} = CASE WHEN {seeders} < {} THEN 0 ELSE {seeders} + {} END, {leechers} = CASE WHEN {leechers} < {} THEN 0 ELSE {leechers} + {} END, {completed} = {completed} + {} WHERE {} = {}",
        quote_identifier(engine, &torrents.table_name),
        p.next(),
        p.next(),
        p.next(),
        p.next(),
        p.next(),
        quote_identifier(engine, &torrents.column_id),
        p.next()
    )
}

/// Binds: peer id, user id, torrent id.
/// Columns: uploaded, downloaded, left, connectable, active.
pub fn build_find_peer_query(engine: DatabaseDrivers, structure: &DatabaseStructureConfig) -> String {
    let peers = &structure.peers;
    let q = |identifier: &str| quote_identifier(engine, identifier);
    let mut p = Placeholders::new(engine);
    format!(
        "SELECT {}, {}, {}, {}, {} FROM {} WHERE {} = {} AND {} = {} AND {} = {} LIMIT 1",
        q(&peers.column_uploaded),
        q(&peers.column_downloaded),
        q(&peers.column_left),
        q(&peers.column_connectable),
        q(&peers.column_active),
        q(&peers.table_name),
        q(&peers.column_peer_id),
        p.next(),
        q(&peers.column_user_id),
        p.next(),
        q(&peers.column_torrent_id),
        p.next()
    )
}

/// Binds: peer id, user id, torrent id, uploaded, downloaded, left, connectable, active.
pub fn build_upsert_peer_query(engine: DatabaseDrivers, structure: &DatabaseStructureConfig) -> String {
    let peers = &structure.peers;
    let q = |identifier: &str| quote_identifier(engine, identifier);
    let mut p = Placeholders::new(engine);
    let columns = [
        &peers.column_peer_id,
        &peers.column_user_id,
        &peers.column_torrent_id,
        &peers.column_uploaded,
        &peers.column_downloaded,
        &peers.column_left,
        &peers.column_connectable,
        &peers.column_active,
    ];
    let names = columns.iter().map(|column| q(column)).collect::<Vec<_>>().join(", ");
    let values = columns.iter().map(|_| p.next()).collect::<Vec<_>>().join(", ");
    let updates = match engine {
        DatabaseDrivers::mysql => format!(
            "ON DUPLICATE KEY UPDATE {}",
            columns[3..].iter().map(|column| format!("{0} = VALUES({0})", q(column))).collect::<Vec<_>>().join(", ")
        ),
        DatabaseDrivers::sqlite3 | DatabaseDrivers::pgsql => format!(
            "ON CONFLICT ({}, {}, {}) DO UPDATE SET {}",
            q(columns[0]),
            q(columns[1]),
            q(columns[2]),
            columns[3..].iter().map(|column| format!("{0} = excluded.{0}", q(column))).collect::<Vec<_>>().join(", ")
        ),
    };
    format!("INSERT INTO {} ({names}) VALUES ({values}) {updates}", q(&peers.table_name))
}

/// Binds: user id.
pub fn build_personal_freeleech_query(engine: DatabaseDrivers, structure: &DatabaseStructureConfig) -> String {
    let table = &structure.personal_freeleech;
    let mut p = Placeholders::new(engine);
    format!(
        "SELECT 1 FROM {} WHERE {} = {} LIMIT 1",
        quote_identifier(engine, &table.table_name),
        quote_identifier(engine, &table.column_user_id),
        p.next()
    )
}

/// Binds: user id, torrent id.
pub fn build_freeleech_token_query(engine: DatabaseDrivers, structure: &DatabaseStructureConfig) -> String {
    let table = &structure.freeleech_tokens;
    let mut p = Placeholders::new(engine);
    format!(
        "SELECT 1 FROM {} WHERE {} = {} AND {} = {} LIMIT 1",
        quote_identifier(engine, &table.table_name),
        quote_identifier(engine, &table.column_user_id),
        p.next(),
        quote_identifier(engine, &table.column_torrent_id),
        p.next()
    )
}

/// Development schema for the tables the ledger touches.
pub fn build_create_table_queries(engine: DatabaseDrivers, structure: &DatabaseStructureConfig) -> Vec<String> {
    let q = |identifier: &str| quote_identifier(engine, identifier);
    let users = &structure.users;
    let torrents = &structure.torrents;
    let peers = &structure.peers;
    let personal = &structure.personal_freeleech;
    let tokens = &structure.freeleech_tokens;
    let bytes = match engine {
        DatabaseDrivers::sqlite3 => "BLOB",
        DatabaseDrivers::mysql => "VARBINARY(64)",
        DatabaseDrivers::pgsql => "BYTEA",
    };
    vec![
        format!(
            "CREATE TABLE IF NOT EXISTS {} ({} BIGINT PRIMARY KEY NOT NULL, {} BIGINT NOT NULL DEFAULT 0, {} BIGINT NOT NULL DEFAULT 0)",
            q(&users.table_name), q(&users.column_id), q(&users.column_uploaded), q(&users.column_downloaded)
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS {} ({} BIGINT PRIMARY KEY NOT NULL, {} BIGINT NOT NULL DEFAULT 0, {} BIGINT NOT NULL DEFAULT 0, {} BIGINT NOT NULL DEFAULT 0)",
            q(&torrents.table_name), q(&torrents.column_id), q(&torrents.column_seeders), q(&torrents.column_leechers), q(&torrents.column_times_completed)
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS {} ({} {bytes} NOT NULL, {} BIGINT NOT NULL, {} BIGINT NOT NULL, {} BIGINT NOT NULL DEFAULT 0, {} BIGINT NOT NULL DEFAULT 0, {} BIGINT NOT NULL DEFAULT 0, {} BIGINT NOT NULL DEFAULT 0, {} BIGINT NOT NULL DEFAULT 0, PRIMARY KEY ({}, {}, {}))",
            q(&peers.table_name), q(&peers.column_peer_id), q(&peers.column_user_id), q(&peers.column_torrent_id),
            q(&peers.column_uploaded), q(&peers.column_downloaded), q(&peers.column_left),
            q(&peers.column_connectable), q(&peers.column_active),
            q(&peers.column_peer_id), q(&peers.column_user_id), q(&peers.column_torrent_id)
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS {} ({} BIGINT NOT NULL)",
            q(&personal.table_name), q(&personal.column_user_id)
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS {} ({} BIGINT NOT NULL, {} BIGINT NOT NULL)",
            q(&tokens.table_name), q(&tokens.column_user_id), q(&tokens.column_torrent_id)
        ),
    ]
}

/// Storage columns are signed 64-bit; larger values saturate.
pub fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Negative column values read back as 0.
pub fn from_i64(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}
