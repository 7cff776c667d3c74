use serde::{Deserialize, Serialize};
use crate::config::structs::database_structure_config_freeleech_tokens::DatabaseStructureConfigFreeleechTokens;
use crate::config::structs::database_structure_config_peers::DatabaseStructureConfigPeers;
use crate::config::structs::database_structure_config_personal_freeleech::DatabaseStructureConfigPersonalFreeleech;
use crate::config::structs::database_structure_config_torrents::DatabaseStructureConfigTorrents;
use crate::config::structs::database_structure_config_users::DatabaseStructureConfigUsers;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatabaseStructureConfig {
    pub users: DatabaseStructureConfigUsers,
    pub torrents: DatabaseStructureConfigTorrents,
    pub peers: DatabaseStructureConfigPeers,
    pub personal_freeleech: DatabaseStructureConfigPersonalFreeleech,
    pub freeleech_tokens: DatabaseStructureConfigFreeleechTokens,
}
