use async_trait::async_trait;
use chrono::{DateTime, Utc};
use relationships_errors::RelationshipError;
use relationships_models::{
    AttendOutcome, AttendedEvent, EventRelationship, SaveOutcome, SavedEvent,
};
use uuid::Uuid;

mod memory;
mod relationships;

pub use memory::MemoryRelationshipStore;
pub use relationships::RelationshipDao;

/// Persistence for the one relationship row kept per event.
///
/// `save` and `attend` apply their transition atomically, so concurrent
/// callers can never leave two rows for the same event.
#[async_trait]
pub trait RelationshipStore: Send + Sync {
    async fn save(
        &self, event_id: Uuid, now: DateTime<Utc>,
    ) -> Result<SaveOutcome, RelationshipError>;

    async fn attend(
        &self, event_id: Uuid, emoji_rating: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<AttendOutcome, RelationshipError>;

    /// Fails with `SavedNotFound` unless the event is currently saved
    async fn remove_saved(
        &self, event_id: Uuid,
    ) -> Result<(), RelationshipError>;

    /// Fails with `AttendedNotFound` unless the event is currently attended
    async fn remove_attended(
        &self, event_id: Uuid,
    ) -> Result<(), RelationshipError>;

    async fn find(
        &self, event_id: Uuid,
    ) -> Result<Option<EventRelationship>, RelationshipError>;

    /// Most recently saved first
    async fn list_saved(&self) -> Result<Vec<SavedEvent>, RelationshipError>;

    /// Most recently attended first
    async fn list_attended(
        &self,
    ) -> Result<Vec<AttendedEvent>, RelationshipError>;

    async fn clear(&self) -> Result<u64, RelationshipError>;
}
