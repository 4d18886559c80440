pub mod fixtures;

use std::time::Duration;

use anyhow::{Context, Result};
pub use fixtures::*;
use sql_connection::{
    PostgresDbConfig, SqlConnect, SqlMigrator, connect_postgres_db,
};
use testcontainers_modules::{
    postgres::Postgres,
    testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner},
};

/// Throwaway PostgreSQL with the schema migrations applied
pub struct TestPostgresContainer {
    pub db: SqlConnect,
    pub connection_string: String,
    // Keep the container alive for the lifetime of this struct
    _container: ContainerAsync<Postgres>,
}

impl TestPostgresContainer {
    /// Starts a fresh container on a random port, connects a small pool
    /// and runs every migration.
    pub async fn new() -> Result<Self> {
        let container = Postgres::default()
            .with_env_var("POSTGRES_DB", "testdb")
            .with_env_var("POSTGRES_USER", "testuser")
            .with_env_var("POSTGRES_PASSWORD", "testpass")
            .start()
            .await
            .context("Failed to start PostgreSQL container")?;

        let host = container.get_host().await?;
        let port = container.get_host_port_ipv4(5432).await?;
        let connection_string =
            format!("postgresql://testuser:testpass@{host}:{port}/testdb");

        let db = Self::connect(&connection_string).await?;

        SqlMigrator::new(db.clone())
            .run_all_migrations()
            .await
            .context("Failed to apply migrations")?;

        Ok(Self {
            db,
            connection_string,
            _container: container,
        })
    }

    async fn connect(connection_string: &str) -> Result<SqlConnect> {
        const MAX_ATTEMPTS: u32 = 20;

        let config = PostgresDbConfig {
            uri: connection_string.to_string(),
            max_conn: Some(10),
            min_conn: None,
        };
        let db = connect_postgres_db(&config).await?;

        for _ in 0..MAX_ATTEMPTS {
            let ready = match db.get_client().await {
                Ok(client) => client.query_one("SELECT 1", &[]).await.is_ok(),
                Err(_) => false,
            };
            if ready {
                return Ok(db);
            }
            tokio::time::sleep(Duration::from_millis(500)).await;
        }

        anyhow::bail!("PostgreSQL not ready after {MAX_ATTEMPTS} attempts")
    }

    pub async fn execute_sql(&self, sql: &str) -> Result<()> {
        let client = self.db.get_client().await?;
        client
            .batch_execute(sql)
            .await
            .context("Failed to execute SQL")?;
        Ok(())
    }
}

pub fn create_sql_connect(container: &TestPostgresContainer) -> SqlConnect {
    container.db.clone()
}
