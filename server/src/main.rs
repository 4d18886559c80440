use sql_connection::{SqlMigrator, connect_postgres_db};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wow::{
    Stores, build_app,
    config::{AppConfig, StoreBackend},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    let stores = match config.backend {
        StoreBackend::Postgres => {
            info!("Initializing connection pool...");
            let db = connect_postgres_db(&config.database).await?;
            info!("PostgreSQL connection pool initialized");

            if config.run_migrations {
                let applied = SqlMigrator::new(db.clone())
                    .run_all_migrations()
                    .await?;
                info!(?applied, "Migrations up to date");
            }

            Stores::postgres(db)
        }
        StoreBackend::Memory => {
            warn!("Using in-memory stores; data is lost on shutdown");
            Stores::memory()
        }
    };

    let app = build_app(&stores);

    info!("🚀 WOW server starting on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(db) = stores.db {
        db.close();
        info!("PostgreSQL connection pool closed");
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(
            tokio::signal::unix::SignalKind::terminate(),
        ) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
