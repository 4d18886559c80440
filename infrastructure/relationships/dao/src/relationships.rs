use async_trait::async_trait;
use chrono::{DateTime, Utc};
use relationships_errors::RelationshipError;
use relationships_models::{
    AttendOutcome, AttendedEvent, EventRelationship, RelationshipState,
    SaveOutcome, SavedEvent,
};
use sql_connection::{Row, SqlConnect};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::RelationshipStore;

const RELATIONSHIP_COLUMNS: &str =
    "event_id, record_id, state, emoji_rating, saved_at, attended_at";

// An existing saved row is returned untouched; any other row is replaced.
// `previous_state` is the state the row had before this statement.
const SAVE_UPSERT: &str = "
    WITH previous AS (
        SELECT state FROM event_relationships WHERE event_id = $1
    )
    INSERT INTO event_relationships (event_id, record_id, state, saved_at)
    VALUES ($1, $2, 'saved', $3)
    ON CONFLICT (event_id) DO UPDATE SET
        record_id = CASE WHEN event_relationships.state = 'saved'
            THEN event_relationships.record_id ELSE EXCLUDED.record_id END,
        saved_at = CASE WHEN event_relationships.state = 'saved'
            THEN event_relationships.saved_at ELSE EXCLUDED.saved_at END,
        state = 'saved',
        emoji_rating = NULL,
        attended_at = NULL
    RETURNING event_id, record_id, state, emoji_rating, saved_at, attended_at,
        (SELECT state FROM previous) AS previous_state";

// An existing attended row keeps its id and attended_at; only the rating moves.
const ATTEND_UPSERT: &str = "
    INSERT INTO event_relationships
        (event_id, record_id, state, emoji_rating, attended_at)
    VALUES ($1, $2, 'attended', $3, $4)
    ON CONFLICT (event_id) DO UPDATE SET
        record_id = CASE WHEN event_relationships.state = 'attended'
            THEN event_relationships.record_id ELSE EXCLUDED.record_id END,
        attended_at = CASE WHEN event_relationships.state = 'attended'
            THEN event_relationships.attended_at ELSE EXCLUDED.attended_at END,
        state = 'attended',
        emoji_rating = EXCLUDED.emoji_rating,
        saved_at = NULL
    RETURNING event_id, record_id, state, emoji_rating, saved_at, attended_at";

#[derive(Clone)]
pub struct RelationshipDao {
    db: SqlConnect,
}

impl RelationshipDao {
    pub fn new(db: SqlConnect) -> Self { Self { db } }

    fn map_row(row: &Row) -> Result<EventRelationship, RelationshipError> {
        let event_id: Uuid = row.get("event_id");
        let state: String = row.get("state");

        let relationship_state = RelationshipState::from_columns(
            &state,
            row.get("emoji_rating"),
            row.get("saved_at"),
            row.get("attended_at"),
        )
        .ok_or(RelationshipError::InvalidRow { event_id, state })?;

        Ok(EventRelationship {
            event_id,
            record_id: row.get("record_id"),
            state: relationship_state,
        })
    }

    fn invalid(row: &EventRelationship) -> RelationshipError {
        RelationshipError::InvalidRow {
            event_id: row.event_id,
            state: row.state.as_str().to_string(),
        }
    }
}

#[async_trait]
impl RelationshipStore for RelationshipDao {
    #[instrument(skip(self, now))]
    async fn save(
        &self, event_id: Uuid, now: DateTime<Utc>,
    ) -> Result<SaveOutcome, RelationshipError> {
        let client = self.db.get_client().await?;
        let proposed_id = Uuid::now_v7();

        let stmt = client.prepare(SAVE_UPSERT).await?;
        let row = client
            .query_one(&stmt, &[&event_id, &proposed_id, &now])
            .await?;
        let relationship = Self::map_row(&row)?;

        let previous: Option<String> = row.get("previous_state");
        if previous.as_deref() == Some("attended") {
            warn!("Save replaces an attended record, attendance is dropped");
        }

        let outcome = SaveOutcome::resolve(&relationship, proposed_id)
            .ok_or_else(|| Self::invalid(&relationship))?;
        info!(new = outcome.is_new(), "Saved event");
        Ok(outcome)
    }

    #[instrument(skip(self, now))]
    async fn attend(
        &self, event_id: Uuid, emoji_rating: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<AttendOutcome, RelationshipError> {
        let client = self.db.get_client().await?;
        let proposed_id = Uuid::now_v7();

        let stmt = client.prepare(ATTEND_UPSERT).await?;
        let row = client
            .query_one(&stmt, &[&event_id, &proposed_id, &emoji_rating, &now])
            .await?;
        let relationship = Self::map_row(&row)?;

        let outcome = AttendOutcome::resolve(&relationship, proposed_id)
            .ok_or_else(|| Self::invalid(&relationship))?;
        info!(new = outcome.is_new(), "Attended event");
        Ok(outcome)
    }

    #[instrument(skip(self))]
    async fn remove_saved(
        &self, event_id: Uuid,
    ) -> Result<(), RelationshipError> {
        let client = self.db.get_client().await?;
        let stmt = client
            .prepare(
                "DELETE FROM event_relationships WHERE event_id = $1 AND \
                 state = 'saved'",
            )
            .await?;
        let affected = client.execute(&stmt, &[&event_id]).await?;

        if affected == 0 {
            return Err(RelationshipError::SavedNotFound { event_id });
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove_attended(
        &self, event_id: Uuid,
    ) -> Result<(), RelationshipError> {
        let client = self.db.get_client().await?;
        let stmt = client
            .prepare(
                "DELETE FROM event_relationships WHERE event_id = $1 AND \
                 state = 'attended'",
            )
            .await?;
        let affected = client.execute(&stmt, &[&event_id]).await?;

        if affected == 0 {
            return Err(RelationshipError::AttendedNotFound { event_id });
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find(
        &self, event_id: Uuid,
    ) -> Result<Option<EventRelationship>, RelationshipError> {
        let client = self.db.get_client().await?;
        let stmt = client
            .prepare(&format!(
                "SELECT {RELATIONSHIP_COLUMNS} FROM event_relationships \
                 WHERE event_id = $1"
            ))
            .await?;
        let rows = client.query(&stmt, &[&event_id]).await?;

        let relationship = rows.first().map(Self::map_row).transpose()?;
        debug!(found = relationship.is_some(), "Looked up relationship");
        Ok(relationship)
    }

    #[instrument(skip(self))]
    async fn list_saved(&self) -> Result<Vec<SavedEvent>, RelationshipError> {
        let client = self.db.get_client().await?;
        let stmt = client
            .prepare(&format!(
                "SELECT {RELATIONSHIP_COLUMNS} FROM event_relationships \
                 WHERE state = 'saved' ORDER BY saved_at DESC, record_id DESC"
            ))
            .await?;
        let rows = client.query(&stmt, &[]).await?;

        rows.iter()
            .map(|row| {
                let relationship = Self::map_row(row)?;
                relationship.saved().ok_or_else(|| Self::invalid(&relationship))
            })
            .collect()
    }

    #[instrument(skip(self))]
    async fn list_attended(
        &self,
    ) -> Result<Vec<AttendedEvent>, RelationshipError> {
        let client = self.db.get_client().await?;
        let stmt = client
            .prepare(&format!(
                "SELECT {RELATIONSHIP_COLUMNS} FROM event_relationships \
                 WHERE state = 'attended' ORDER BY attended_at DESC, \
                 record_id DESC"
            ))
            .await?;
        let rows = client.query(&stmt, &[]).await?;

        rows.iter()
            .map(|row| {
                let relationship = Self::map_row(row)?;
                relationship
                    .attended()
                    .ok_or_else(|| Self::invalid(&relationship))
            })
            .collect()
    }

    #[instrument(skip(self))]
    async fn clear(&self) -> Result<u64, RelationshipError> {
        let client = self.db.get_client().await?;
        let removed = client
            .execute("DELETE FROM event_relationships", &[])
            .await?;
        Ok(removed)
    }
}
