use std::sync::Arc;

use chrono::Utc;
use common_errors::AppError;
use events_commands::{
    CreateEventCommand, DeleteEventCommand, SeedEventsCommand,
};
use events_dao::EventStore;
use events_errors::EventError;
use events_models::{NewEvent, sample_events};
use events_responses::{EventResponse, SeedEventsResponse};
use relationships_dao::RelationshipStore;
use relationships_errors::RelationshipError;
use thiserror::Error;
use tracing::{info, instrument};
use uuid::Uuid;

#[derive(Clone)]
pub struct CreateEventHandler {
    events: Arc<dyn EventStore>,
}

impl CreateEventHandler {
    pub fn new(events: Arc<dyn EventStore>) -> Self { Self { events } }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, command: CreateEventCommand,
    ) -> Result<EventResponse, EventError> {
        let event =
            NewEvent::from(command).into_event(Uuid::now_v7(), Utc::now());
        let saved_event = self.events.insert(event).await?;

        info!(
            event_id = %saved_event.id,
            category = %saved_event.category,
            "Event created"
        );
        Ok(saved_event.into())
    }
}

#[derive(Clone)]
pub struct DeleteEventHandler {
    events: Arc<dyn EventStore>,
}

impl DeleteEventHandler {
    pub fn new(events: Arc<dyn EventStore>) -> Self { Self { events } }

    /// Relationship rows pointing at the event are left in place.
    #[instrument(skip(self))]
    pub async fn execute(
        &self, command: DeleteEventCommand,
    ) -> Result<(), EventError> {
        self.events.delete(command.event_id).await?;

        info!(event_id = %command.event_id, "Event deleted");
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum SeedEventsError {
    #[error(transparent)]
    Events(#[from] EventError),
    #[error(transparent)]
    Relationships(#[from] RelationshipError),
}

impl From<SeedEventsError> for AppError {
    fn from(err: SeedEventsError) -> Self {
        match err {
            SeedEventsError::Events(e) => e.into(),
            SeedEventsError::Relationships(e) => e.into(),
        }
    }
}

#[derive(Clone)]
pub struct SeedEventsHandler {
    events: Arc<dyn EventStore>,
    relationships: Arc<dyn RelationshipStore>,
}

impl SeedEventsHandler {
    pub fn new(
        events: Arc<dyn EventStore>, relationships: Arc<dyn RelationshipStore>,
    ) -> Self {
        Self {
            events,
            relationships,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, _command: SeedEventsCommand,
    ) -> Result<SeedEventsResponse, SeedEventsError> {
        let removed_events = self.events.clear().await?;
        let removed_relationships = self.relationships.clear().await?;
        info!(removed_events, removed_relationships, "Cleared catalog");

        let mut seeded = 0;
        for sample in sample_events() {
            let event = sample.into_event(Uuid::now_v7(), Utc::now());
            self.events.insert(event).await?;
            seeded += 1;
        }

        info!(seeded, "Seeded sample events");
        Ok(SeedEventsResponse::new(seeded))
    }
}
