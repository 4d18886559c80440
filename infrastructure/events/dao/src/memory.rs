use std::{cmp::Reverse, sync::Arc};

use async_trait::async_trait;
use events_errors::EventError;
use events_models::{CategoryFilter, Event};
use tokio::sync::RwLock;
use tracing::instrument;
use uuid::Uuid;

use crate::EventStore;

/// Process-local event store for tests and database-less runs
#[derive(Clone, Default)]
pub struct MemoryEventStore {
    events: Arc<RwLock<Vec<Event>>>,
}

impl MemoryEventStore {
    pub fn new() -> Self { Self::default() }

    fn newest_first(mut events: Vec<Event>) -> Vec<Event> {
        events.sort_by_key(|e| Reverse((e.created_at, e.id)));
        events
    }
}

#[async_trait]
impl EventStore for MemoryEventStore {
    #[instrument(skip(self, event), fields(event_id = %event.id))]
    async fn insert(&self, event: Event) -> Result<Event, EventError> {
        let mut events = self.events.write().await;
        events.push(event.clone());
        Ok(event)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Event, EventError> {
        let events = self.events.read().await;
        events
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(EventError::NotFound { event_id: id })
    }

    async fn find_by_ids(
        &self, ids: &[Uuid],
    ) -> Result<Vec<Event>, EventError> {
        let events = self.events.read().await;
        let found = events
            .iter()
            .filter(|e| ids.contains(&e.id))
            .cloned()
            .collect();
        Ok(Self::newest_first(found))
    }

    async fn list(
        &self, filter: &CategoryFilter,
    ) -> Result<Vec<Event>, EventError> {
        let events = self.events.read().await;
        let matching = events
            .iter()
            .filter(|e| filter.matches(&e.category))
            .cloned()
            .collect();
        Ok(Self::newest_first(matching))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> Result<(), EventError> {
        let mut events = self.events.write().await;
        let before = events.len();
        events.retain(|e| e.id != id);

        if events.len() == before {
            return Err(EventError::NotFound { event_id: id });
        }

        Ok(())
    }

    async fn clear(&self) -> Result<u64, EventError> {
        let mut events = self.events.write().await;
        let removed = events.len() as u64;
        events.clear();
        Ok(removed)
    }

    async fn count(&self) -> Result<u64, EventError> {
        Ok(self.events.read().await.len() as u64)
    }
}
