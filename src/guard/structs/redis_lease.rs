use redis::aio::MultiplexedConnection;

#[derive(Clone)]
pub struct RedisLease {
    pub(crate) connection: MultiplexedConnection,
    pub(crate) prefix: String,
}
