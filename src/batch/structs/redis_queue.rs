use redis::aio::MultiplexedConnection;

#[derive(Clone)]
pub struct RedisQueue {
    pub(crate) connection: MultiplexedConnection,
    pub(crate) prefix: String,
}
