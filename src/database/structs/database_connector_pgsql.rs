use sqlx::{Pool, Postgres};
use crate::config::structs::database_structure_config::DatabaseStructureConfig;

#[derive(Debug, Clone)]
pub struct DatabaseConnectorPgSQL {
    pub(crate) pool: Pool<Postgres>,
    pub(crate) structure: DatabaseStructureConfig,
}
