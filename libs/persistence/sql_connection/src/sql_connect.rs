use deadpool_postgres::{Object, Pool, PoolError};

/// Owned handle to the PostgreSQL pool. Cloning shares the pool.
#[derive(Debug, Clone)]
pub struct SqlConnect {
    pool: Pool,
}

impl SqlConnect {
    pub fn new(pool: Pool) -> Self { Self { pool } }

    pub async fn get_client(&self) -> Result<Object, PoolError> {
        self.pool.get().await
    }

    /// Available and total connections, for health reporting
    pub fn get_pool_status(&self) -> (usize, usize) {
        let status = self.pool.status();
        (status.available, status.size)
    }

    /// Stops handing out connections and drops the idle ones.
    pub fn close(&self) { self.pool.close() }
}
