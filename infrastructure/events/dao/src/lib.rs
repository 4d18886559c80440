use async_trait::async_trait;
use events_errors::EventError;
use events_models::{CategoryFilter, Event};
use uuid::Uuid;

mod events;
mod memory;

pub use events::EventDao;
pub use memory::MemoryEventStore;

/// Persistence for catalog events. Listings are ordered newest first,
/// ties broken by id.
#[async_trait]
pub trait EventStore: Send + Sync {
    async fn insert(&self, event: Event) -> Result<Event, EventError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Event, EventError>;

    /// Events among `ids` that exist, in listing order
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Event>, EventError>;

    async fn list(
        &self, filter: &CategoryFilter,
    ) -> Result<Vec<Event>, EventError>;

    async fn delete(&self, id: Uuid) -> Result<(), EventError>;

    /// Removes every event and returns how many were removed
    async fn clear(&self) -> Result<u64, EventError>;

    async fn count(&self) -> Result<u64, EventError>;
}
