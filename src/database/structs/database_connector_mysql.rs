use sqlx::{Pool, MySql};
use crate::config::structs::database_structure_config::DatabaseStructureConfig;

#[derive(Debug, Clone)]
pub struct DatabaseConnectorMySQL {
    pub(crate) pool: Pool<MySql>,
    pub(crate) structure: DatabaseStructureConfig,
}
