use async_trait::async_trait;
use events_errors::EventError;
use events_models::{CategoryFilter, Event};
use sql_connection::{Row, SqlConnect};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::EventStore;

const EVENT_COLUMNS: &str =
    "id, title, description, category, image, date, time, location, created_at";

#[derive(Clone)]
pub struct EventDao {
    db: SqlConnect,
}

impl EventDao {
    pub fn new(db: SqlConnect) -> Self { Self { db } }

    fn map_row(row: &Row) -> Event {
        Event {
            id: row.get("id"),
            title: row.get("title"),
            description: row.get("description"),
            category: row.get("category"),
            image: row.get("image"),
            date: row.get("date"),
            time: row.get("time"),
            location: row.get("location"),
            created_at: row.get("created_at"),
        }
    }
}

#[async_trait]
impl EventStore for EventDao {
    #[instrument(skip(self, event), fields(event_id = %event.id))]
    async fn insert(&self, event: Event) -> Result<Event, EventError> {
        let client = self.db.get_client().await?;
        let stmt = client
            .prepare(&format!(
                "INSERT INTO events ({EVENT_COLUMNS}) VALUES ($1, $2, $3, \
                 $4, $5, $6, $7, $8, $9) RETURNING {EVENT_COLUMNS}"
            ))
            .await?;
        let row = client
            .query_one(
                &stmt,
                &[
                    &event.id,
                    &event.title,
                    &event.description,
                    &event.category,
                    &event.image,
                    &event.date,
                    &event.time,
                    &event.location,
                    &event.created_at,
                ],
            )
            .await?;

        Ok(Self::map_row(&row))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> Result<Event, EventError> {
        let client = self.db.get_client().await?;
        let stmt = client
            .prepare(&format!(
                "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"
            ))
            .await?;
        let rows = client.query(&stmt, &[&id]).await?;

        rows.first()
            .map(Self::map_row)
            .ok_or(EventError::NotFound { event_id: id })
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn find_by_ids(
        &self, ids: &[Uuid],
    ) -> Result<Vec<Event>, EventError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let client = self.db.get_client().await?;
        let stmt = client
            .prepare(&format!(
                "SELECT {EVENT_COLUMNS} FROM events WHERE id = ANY($1) \
                 ORDER BY created_at DESC, id DESC"
            ))
            .await?;
        let rows = client.query(&stmt, &[&ids]).await?;

        Ok(rows.iter().map(Self::map_row).collect())
    }

    #[instrument(skip(self))]
    async fn list(
        &self, filter: &CategoryFilter,
    ) -> Result<Vec<Event>, EventError> {
        let client = self.db.get_client().await?;

        let rows = match filter.as_category() {
            Some(category) => {
                let stmt = client
                    .prepare(&format!(
                        "SELECT {EVENT_COLUMNS} FROM events WHERE category = \
                         $1 ORDER BY created_at DESC, id DESC"
                    ))
                    .await?;
                client.query(&stmt, &[&category]).await?
            }
            None => {
                let stmt = client
                    .prepare(&format!(
                        "SELECT {EVENT_COLUMNS} FROM events ORDER BY \
                         created_at DESC, id DESC"
                    ))
                    .await?;
                client.query(&stmt, &[]).await?
            }
        };

        debug!(count = rows.len(), "Listed events");
        Ok(rows.iter().map(Self::map_row).collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> Result<(), EventError> {
        let client = self.db.get_client().await?;
        let stmt = client.prepare("DELETE FROM events WHERE id = $1").await?;
        let affected = client.execute(&stmt, &[&id]).await?;

        if affected == 0 {
            return Err(EventError::NotFound { event_id: id });
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn clear(&self) -> Result<u64, EventError> {
        let client = self.db.get_client().await?;
        let removed = client.execute("DELETE FROM events", &[]).await?;
        Ok(removed)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> Result<u64, EventError> {
        let client = self.db.get_client().await?;
        let row = client.query_one("SELECT COUNT(*) FROM events", &[]).await?;
        let count: i64 = row.get(0);
        Ok(count.max(0) as u64)
    }
}
