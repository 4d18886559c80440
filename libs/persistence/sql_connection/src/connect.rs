use std::time::Duration;

use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod};
use tokio_postgres::NoTls;
use tracing::{debug, info, instrument, warn};

use crate::{
    SqlConnect,
    config::{DbConnectConfig, DbOptionsConfig},
};

/// Pre-warms a connection pool by creating connections up front
async fn prewarm_pool(pool: &Pool, count: u32) {
    debug!("Pre-warming pool with {} connections", count);
    let mut handles = vec![];

    for i in 0..count {
        let pool = pool.clone();
        handles.push(tokio::spawn(async move {
            match pool.get().await {
                Ok(_conn) => {
                    debug!("Pre-warmed connection {}/{}", i + 1, count);
                }
                Err(e) => {
                    warn!("Failed to pre-warm connection {}: {}", i + 1, e);
                }
            }
        }));
    }

    for handle in handles {
        let _ = handle.await;
    }

    let status = pool.status();
    info!(
        "Pool pre-warming complete: {} connections available",
        status.available
    );
}

/// Builds the pool described by `config` and hands ownership to the caller.
#[instrument(skip_all, name = "connect-pgsql")]
pub async fn connect_postgres_db<C>(
    config: &C,
) -> Result<SqlConnect, anyhow::Error>
where
    C: DbConnectConfig + DbOptionsConfig,
{
    let pg_config = config.uri().parse::<tokio_postgres::Config>()?;

    info!(
        postgres.hosts = ?pg_config.get_hosts(),
        postgres.dbname = ?pg_config.get_dbname(),
        postgres.max_conn = ?config.max_conn(),
        postgres.min_conn = ?config.min_conn()
    );

    let mgr_config = ManagerConfig {
        recycling_method: RecyclingMethod::Fast,
    };
    let mgr = Manager::from_config(pg_config, NoTls, mgr_config);

    let mut pool_builder = Pool::builder(mgr)
        .runtime(deadpool_postgres::Runtime::Tokio1)
        .wait_timeout(Some(config.wait_timeout()))
        .create_timeout(Some(Duration::from_millis(5000)))
        .recycle_timeout(Some(Duration::from_millis(100)));

    if let Some(max_conn) = config.max_conn() {
        pool_builder = pool_builder.max_size(max_conn as usize);
    }

    let pool = pool_builder.build()?;

    if let Some(min_conn) = config.min_conn() {
        prewarm_pool(&pool, min_conn).await;
    }

    Ok(SqlConnect::new(pool))
}
