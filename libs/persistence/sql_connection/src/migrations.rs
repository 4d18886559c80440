use tracing::{info, instrument};

use crate::SqlConnect;

/// An embedded schema migration, applied at most once
#[derive(Debug, Clone, Copy)]
pub struct Migration {
    pub name: &'static str,
    pub sql: &'static str,
}

/// Migrations in application order
pub const MIGRATIONS: &[Migration] = &[
    Migration {
        name: "001_create_events",
        sql: include_str!("../../../../domains/events/migrations/sql/001_create_events.sql"),
    },
    Migration {
        name: "002_create_event_relationships",
        sql: include_str!(
            "../../../../domains/relationships/migrations/sql/002_create_event_relationships.sql"
        ),
    },
];

const CREATE_MIGRATION_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS _migrations (
        name TEXT PRIMARY KEY,
        applied_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

pub struct SqlMigrator {
    db: SqlConnect,
}

impl SqlMigrator {
    pub fn new(db: SqlConnect) -> Self { Self { db } }

    async fn create_migration_table(&self) -> anyhow::Result<()> {
        let client = self.db.get_client().await?;
        client.batch_execute(CREATE_MIGRATION_TABLE).await?;
        Ok(())
    }

    /// Applies every pending migration, each inside its own transaction.
    /// Returns the names applied by this call.
    #[instrument(skip(self))]
    pub async fn run_all_migrations(
        &self,
    ) -> anyhow::Result<Vec<&'static str>> {
        self.create_migration_table().await?;

        let applied = self.list_applied_migrations().await?;
        let mut newly_applied = Vec::new();

        let mut client = self.db.get_client().await?;
        for migration in MIGRATIONS {
            if applied.iter().any(|name| name == migration.name) {
                continue;
            }

            info!(migration = migration.name, "Applying migration");
            let tx = client.transaction().await?;
            tx.batch_execute(migration.sql).await.map_err(|e| {
                anyhow::anyhow!(
                    "Failed to apply migration {}: {}",
                    migration.name,
                    e
                )
            })?;
            tx.execute(
                "INSERT INTO _migrations (name) VALUES ($1)",
                &[&migration.name],
            )
            .await?;
            tx.commit().await?;

            newly_applied.push(migration.name);
        }

        info!(count = newly_applied.len(), "Migrations up to date");
        Ok(newly_applied)
    }

    /// Names of applied migrations, oldest first
    pub async fn list_applied_migrations(&self) -> anyhow::Result<Vec<String>> {
        self.create_migration_table().await?;

        let client = self.db.get_client().await?;
        let rows = client
            .query(
                "SELECT name FROM _migrations ORDER BY applied_at, name",
                &[],
            )
            .await?;

        Ok(rows.iter().map(|row| row.get::<_, String>("name")).collect())
    }

    /// Embedded migrations not yet recorded in `_migrations`
    pub async fn list_pending_migrations(
        &self,
    ) -> anyhow::Result<Vec<&'static str>> {
        let applied = self.list_applied_migrations().await?;
        Ok(MIGRATIONS
            .iter()
            .filter(|m| !applied.iter().any(|name| name == m.name))
            .map(|m| m.name)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_ordered_and_unique() {
        let names: Vec<_> = MIGRATIONS.iter().map(|m| m.name).collect();
        let mut sorted = names.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(names, sorted);
    }

    #[test]
    fn migrations_create_expected_tables() {
        assert!(
            MIGRATIONS[0]
                .sql
                .contains("CREATE TABLE IF NOT EXISTS events")
        );
        assert!(
            MIGRATIONS[1]
                .sql
                .contains("CREATE TABLE IF NOT EXISTS event_relationships")
        );
    }
}
