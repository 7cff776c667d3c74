use redis::aio::MultiplexedConnection;

/// `BLPOP` blocks its connection, so pops and pushes use separate ones.
#[derive(Clone)]
pub struct RedisJobQueue {
    pub(crate) pop_connection: MultiplexedConnection,
    pub(crate) push_connection: MultiplexedConnection,
    pub(crate) key: String,
}
