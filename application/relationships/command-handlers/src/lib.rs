use std::sync::Arc;

use chrono::Utc;
use events_dao::EventStore;
use relationships_commands::{
    AttendEventCommand, RemoveAttendedCommand, SaveEventCommand,
    UnsaveEventCommand,
};
use relationships_dao::RelationshipStore;
use relationships_errors::RelationshipError;
use relationships_responses::{AttendEventResponse, SaveEventResponse};
use tracing::{info, instrument};

#[derive(Clone)]
pub struct SaveEventHandler {
    events: Arc<dyn EventStore>,
    relationships: Arc<dyn RelationshipStore>,
}

impl SaveEventHandler {
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
        &self, command: SaveEventCommand,
    ) -> Result<SaveEventResponse, RelationshipError> {
        self.events.find_by_id(command.event_id).await?;

        let outcome =
            self.relationships.save(command.event_id, Utc::now()).await?;

        info!(
            event_id = %command.event_id,
            new = outcome.is_new(),
            "Event saved"
        );
        Ok(outcome.into())
    }
}

#[derive(Clone)]
pub struct UnsaveEventHandler {
    relationships: Arc<dyn RelationshipStore>,
}

impl UnsaveEventHandler {
    pub fn new(relationships: Arc<dyn RelationshipStore>) -> Self {
        Self { relationships }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, command: UnsaveEventCommand,
    ) -> Result<(), RelationshipError> {
        self.relationships.remove_saved(command.event_id).await?;

        info!(event_id = %command.event_id, "Event removed from saved");
        Ok(())
    }
}

#[derive(Clone)]
pub struct AttendEventHandler {
    events: Arc<dyn EventStore>,
    relationships: Arc<dyn RelationshipStore>,
}

impl AttendEventHandler {
    pub fn new(
        events: Arc<dyn EventStore>, relationships: Arc<dyn RelationshipStore>,
    ) -> Self {
        Self {
            events,
            relationships,
        }
    }

    /// Marks the event attended, evicting a saved record. Re-attending only
    /// replaces the rating.
    #[instrument(skip(self))]
    pub async fn execute(
        &self, command: AttendEventCommand,
    ) -> Result<AttendEventResponse, RelationshipError> {
        self.events.find_by_id(command.event_id).await?;

        let outcome = self
            .relationships
            .attend(command.event_id, command.emoji_rating, Utc::now())
            .await?;

        info!(
            event_id = %command.event_id,
            new = outcome.is_new(),
            rating = ?outcome.attended().emoji_rating,
            "Event attended"
        );
        Ok(outcome.into())
    }
}

#[derive(Clone)]
pub struct RemoveAttendedHandler {
    relationships: Arc<dyn RelationshipStore>,
}

impl RemoveAttendedHandler {
    pub fn new(relationships: Arc<dyn RelationshipStore>) -> Self {
        Self { relationships }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, command: RemoveAttendedCommand,
    ) -> Result<(), RelationshipError> {
        self.relationships.remove_attended(command.event_id).await?;

        info!(event_id = %command.event_id, "Event removed from attended");
        Ok(())
    }
}
