pub use config::{DbConnectConfig, DbOptionsConfig, PostgresDbConfig};
pub use connect::connect_postgres_db;
pub use deadpool_postgres::PoolError;
pub use migrations::{MIGRATIONS, Migration, SqlMigrator};
pub use sql_connect::SqlConnect;
pub use tokio_postgres::{Error as PgError, Row};

pub mod config;
mod connect;
pub mod migrations;
mod sql_connect;
