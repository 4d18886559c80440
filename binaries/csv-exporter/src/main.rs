use std::{env, path::PathBuf, sync::Arc};

use anyhow::Result;
use clap::{Parser, Subcommand};
use events_dao::EventDao;
use events_models::CategoryFilter;
use relationships_dao::RelationshipDao;
use sql_connection::{PostgresDbConfig, connect_postgres_db};
use tracing::info;

use crate::export::Exporter;

mod csv;
mod export;

#[derive(Parser)]
#[command(name = "csv-exporter")]
#[command(about = "Export WOW events and relationships to CSV files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output directory for CSV files
    #[arg(short, long, global = true, default_value = "./exports")]
    output_dir: PathBuf,

    /// Only export events (and relationships) in this category
    #[arg(long, global = true)]
    category: Option<String>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Export the event catalog to events.csv
    Events,
    /// Export saved events to saved.csv
    Saved,
    /// Export attended events to attended.csv
    Attended,
    /// Export everything
    All,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_env_filter("info").init();

    let cli = Cli::parse();

    let config = PostgresDbConfig {
        uri: env::var("DATABASE_URL")?,
        max_conn: Some(4),
        min_conn: None,
    };
    let db = connect_postgres_db(&config).await?;

    let exporter = Exporter::new(
        Arc::new(EventDao::new(db.clone())),
        Arc::new(RelationshipDao::new(db.clone())),
        cli.output_dir,
    );
    let filter = CategoryFilter::from_param(cli.category.as_deref());

    match cli.command {
        Commands::Events => {
            exporter.export_events(&filter).await?;
        }
        Commands::Saved => {
            exporter.export_saved(&filter).await?;
        }
        Commands::Attended => {
            exporter.export_attended(&filter).await?;
        }
        Commands::All => {
            exporter.export_events(&filter).await?;
            exporter.export_saved(&filter).await?;
            exporter.export_attended(&filter).await?;
        }
    }

    db.close();
    info!("Done!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_arguments() {
        let cli = Cli::parse_from([
            "csv-exporter",
            "saved",
            "--category",
            "music",
            "-o",
            "/tmp/wow",
        ]);

        assert_eq!(cli.command, Commands::Saved);
        assert_eq!(cli.category.as_deref(), Some("music"));
        assert_eq!(cli.output_dir, PathBuf::from("/tmp/wow"));
    }
}
