use std::{cmp::Reverse, collections::HashMap, sync::Arc};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use relationships_errors::RelationshipError;
use relationships_models::{
    AttendOutcome, AttendedEvent, EventRelationship, SaveOutcome, SavedEvent,
};
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::RelationshipStore;

/// Process-local relationship store. Transitions run under the write lock.
#[derive(Clone, Default)]
pub struct MemoryRelationshipStore {
    rows: Arc<RwLock<HashMap<Uuid, EventRelationship>>>,
}

impl MemoryRelationshipStore {
    pub fn new() -> Self { Self::default() }

    fn invalid(row: &EventRelationship) -> RelationshipError {
        RelationshipError::InvalidRow {
            event_id: row.event_id,
            state: row.state.as_str().to_string(),
        }
    }
}

#[async_trait]
impl RelationshipStore for MemoryRelationshipStore {
    #[instrument(skip(self, now))]
    async fn save(
        &self, event_id: Uuid, now: DateTime<Utc>,
    ) -> Result<SaveOutcome, RelationshipError> {
        let proposed_id = Uuid::now_v7();
        let mut rows = self.rows.write().await;
        let current = rows.get(&event_id);
        if current.is_some_and(EventRelationship::is_attended) {
            warn!("Save replaces an attended record, attendance is dropped");
        }

        let next =
            EventRelationship::save(current, event_id, proposed_id, now);
        let outcome = SaveOutcome::resolve(&next, proposed_id)
            .ok_or_else(|| Self::invalid(&next))?;
        rows.insert(event_id, next);

        info!(new = outcome.is_new(), "Saved event");
        Ok(outcome)
    }

    #[instrument(skip(self, now))]
    async fn attend(
        &self, event_id: Uuid, emoji_rating: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<AttendOutcome, RelationshipError> {
        let proposed_id = Uuid::now_v7();
        let mut rows = self.rows.write().await;

        let next = EventRelationship::attend(
            rows.get(&event_id),
            event_id,
            proposed_id,
            emoji_rating,
            now,
        );
        let outcome = AttendOutcome::resolve(&next, proposed_id)
            .ok_or_else(|| Self::invalid(&next))?;
        rows.insert(event_id, next);

        info!(new = outcome.is_new(), "Attended event");
        Ok(outcome)
    }

    #[instrument(skip(self))]
    async fn remove_saved(
        &self, event_id: Uuid,
    ) -> Result<(), RelationshipError> {
        let mut rows = self.rows.write().await;
        if !rows.get(&event_id).is_some_and(EventRelationship::is_saved) {
            return Err(RelationshipError::SavedNotFound { event_id });
        }

        rows.remove(&event_id);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove_attended(
        &self, event_id: Uuid,
    ) -> Result<(), RelationshipError> {
        let mut rows = self.rows.write().await;
        if !rows.get(&event_id).is_some_and(EventRelationship::is_attended) {
            return Err(RelationshipError::AttendedNotFound { event_id });
        }

        rows.remove(&event_id);
        Ok(())
    }

    async fn find(
        &self, event_id: Uuid,
    ) -> Result<Option<EventRelationship>, RelationshipError> {
        Ok(self.rows.read().await.get(&event_id).cloned())
    }

    async fn list_saved(&self) -> Result<Vec<SavedEvent>, RelationshipError> {
        let rows = self.rows.read().await;
        let mut saved: Vec<_> =
            rows.values().filter_map(EventRelationship::saved).collect();
        saved.sort_by_key(|s| Reverse((s.saved_at, s.id)));
        Ok(saved)
    }

    async fn list_attended(
        &self,
    ) -> Result<Vec<AttendedEvent>, RelationshipError> {
        let rows = self.rows.read().await;
        let mut attended: Vec<_> =
            rows.values().filter_map(EventRelationship::attended).collect();
        attended.sort_by_key(|a| Reverse((a.attended_at, a.id)));
        Ok(attended)
    }

    async fn clear(&self) -> Result<u64, RelationshipError> {
        let mut rows = self.rows.write().await;
        let removed = rows.len() as u64;
        rows.clear();
        Ok(removed)
    }
}
