use redis::aio::MultiplexedConnection;

#[derive(Clone)]
pub struct CacheConnectorRedis {
    pub(crate) connection: MultiplexedConnection,
    pub(crate) prefix: String,
}
