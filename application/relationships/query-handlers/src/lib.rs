use std::{collections::HashMap, sync::Arc};

use events_dao::EventStore;
use events_responses::EventResponse;
use relationships_dao::RelationshipStore;
use relationships_errors::RelationshipError;
use relationships_models::RelationshipStatus;
use relationships_queries::{
    CheckAttendedQuery, CheckSavedQuery, ListAttendedQuery, ListSavedQuery,
};
use relationships_responses::{AttendedEventDetails, SavedEventDetails};
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Loads the events behind `event_ids`, keyed by id. Missing events are
/// simply absent from the map.
async fn load_events(
    events: &dyn EventStore, event_ids: &[Uuid],
) -> Result<HashMap<Uuid, EventResponse>, RelationshipError> {
    let found = events.find_by_ids(event_ids).await?;
    Ok(found.into_iter().map(|e| (e.id, e.into())).collect())
}

#[derive(Clone)]
pub struct CheckSavedQueryHandler {
    relationships: Arc<dyn RelationshipStore>,
}

impl CheckSavedQueryHandler {
    pub fn new(relationships: Arc<dyn RelationshipStore>) -> Self {
        Self { relationships }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, query: CheckSavedQuery,
    ) -> Result<RelationshipStatus, RelationshipError> {
        let row = self.relationships.find(query.event_id).await?;
        let status = RelationshipStatus::of(row.as_ref());

        debug!(event_id = %query.event_id, ?status, "Checked saved");
        Ok(status)
    }
}

#[derive(Clone)]
pub struct CheckAttendedQueryHandler {
    relationships: Arc<dyn RelationshipStore>,
}

impl CheckAttendedQueryHandler {
    pub fn new(relationships: Arc<dyn RelationshipStore>) -> Self {
        Self { relationships }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, query: CheckAttendedQuery,
    ) -> Result<RelationshipStatus, RelationshipError> {
        let row = self.relationships.find(query.event_id).await?;
        let status = RelationshipStatus::of(row.as_ref());

        debug!(event_id = %query.event_id, ?status, "Checked attended");
        Ok(status)
    }
}

#[derive(Clone)]
pub struct ListSavedQueryHandler {
    events: Arc<dyn EventStore>,
    relationships: Arc<dyn RelationshipStore>,
}

impl ListSavedQueryHandler {
    pub fn new(
        events: Arc<dyn EventStore>, relationships: Arc<dyn RelationshipStore>,
    ) -> Self {
        Self {
            events,
            relationships,
        }
    }

    /// Saved records, most recent first, each joined with its event.
    /// Records whose event was deleted are skipped.
    #[instrument(skip(self))]
    pub async fn execute(
        &self, _query: ListSavedQuery,
    ) -> Result<Vec<SavedEventDetails>, RelationshipError> {
        let saved = self.relationships.list_saved().await?;
        let ids: Vec<Uuid> = saved.iter().map(|s| s.event_id).collect();
        let mut events = load_events(self.events.as_ref(), &ids).await?;

        let details = saved
            .into_iter()
            .filter_map(|saved| {
                match events.remove(&saved.event_id) {
                    Some(event) => Some(SavedEventDetails { saved, event }),
                    None => {
                        warn!(
                            event_id = %saved.event_id,
                            "Skipping saved record of deleted event"
                        );
                        None
                    }
                }
            })
            .collect();

        Ok(details)
    }
}

#[derive(Clone)]
pub struct ListAttendedQueryHandler {
    events: Arc<dyn EventStore>,
    relationships: Arc<dyn RelationshipStore>,
}

impl ListAttendedQueryHandler {
    pub fn new(
        events: Arc<dyn EventStore>, relationships: Arc<dyn RelationshipStore>,
    ) -> Self {
        Self {
            events,
            relationships,
        }
    }

    /// Attended records, most recent first, each joined with its event.
    /// Records whose event was deleted are skipped.
    #[instrument(skip(self))]
    pub async fn execute(
        &self, _query: ListAttendedQuery,
    ) -> Result<Vec<AttendedEventDetails>, RelationshipError> {
        let attended = self.relationships.list_attended().await?;
        let ids: Vec<Uuid> = attended.iter().map(|a| a.event_id).collect();
        let mut events = load_events(self.events.as_ref(), &ids).await?;

        let details = attended
            .into_iter()
            .filter_map(|attended| {
                match events.remove(&attended.event_id) {
                    Some(event) => {
                        Some(AttendedEventDetails { attended, event })
                    }
                    None => {
                        warn!(
                            event_id = %attended.event_id,
                            "Skipping attended record of deleted event"
                        );
                        None
                    }
                }
            })
            .collect();

        Ok(details)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use events_dao::MemoryEventStore;
    use relationships_dao::MemoryRelationshipStore;
    use test_utils::sample_event;

    use super::*;

    struct Setup {
        events: Arc<MemoryEventStore>,
        relationships: Arc<MemoryRelationshipStore>,
    }

    impl Setup {
        fn new() -> Self {
            Self {
                events: Arc::new(MemoryEventStore::new()),
                relationships: Arc::new(MemoryRelationshipStore::new()),
            }
        }

        async fn event(&self, title: &str) -> Uuid {
            self.events
                .insert(sample_event(title, "music", 0))
                .await
                .unwrap()
                .id
        }
    }

    #[tokio::test]
    async fn test_check_saved_and_attended() {
        let s = Setup::new();
        let event_id = s.event("Jazz").await;
        let check_saved = CheckSavedQueryHandler::new(s.relationships.clone());
        let check_attended =
            CheckAttendedQueryHandler::new(s.relationships.clone());

        let status = check_saved
            .execute(CheckSavedQuery { event_id })
            .await
            .unwrap();
        assert_eq!(status, RelationshipStatus::None);

        s.relationships
            .attend(event_id, Some("🎷".to_string()), Utc::now())
            .await
            .unwrap();
        let status = check_attended
            .execute(CheckAttendedQuery { event_id })
            .await
            .unwrap();
        assert!(status.is_attended());
        assert_eq!(status.emoji_rating(), Some("🎷"));

        let status = check_saved
            .execute(CheckSavedQuery { event_id })
            .await
            .unwrap();
        assert!(!status.is_saved());
    }

    #[tokio::test]
    async fn test_list_saved_joins_events_most_recent_first() {
        let s = Setup::new();
        let older = s.event("Jazz").await;
        let newer = s.event("Rock").await;
        let now = Utc::now();
        s.relationships.save(older, now - Duration::minutes(1)).await.unwrap();
        s.relationships.save(newer, now).await.unwrap();

        let handler = ListSavedQueryHandler::new(
            s.events.clone(),
            s.relationships.clone(),
        );
        let saved = handler.execute(ListSavedQuery).await.unwrap();

        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0].event.title, "Rock");
        assert_eq!(saved[0].saved.event_id, newer);
        assert_eq!(saved[1].event.title, "Jazz");
    }

    #[tokio::test]
    async fn test_deleted_event_drops_out_of_attended_list() {
        let s = Setup::new();
        let kept = s.event("Yoga").await;
        let deleted = s.event("Mercado").await;
        s.relationships.attend(kept, None, Utc::now()).await.unwrap();
        s.relationships
            .attend(deleted, Some("👍".to_string()), Utc::now())
            .await
            .unwrap();

        s.events.delete(deleted).await.unwrap();

        let handler = ListAttendedQueryHandler::new(
            s.events.clone(),
            s.relationships.clone(),
        );
        let attended = handler.execute(ListAttendedQuery).await.unwrap();

        assert_eq!(attended.len(), 1);
        assert_eq!(attended[0].attended.event_id, kept);
        assert!(s.relationships.find(deleted).await.unwrap().is_some());
    }
}
