use std::sync::Arc;

use events_dao::EventStore;
use events_errors::EventError;
use events_models::Event;
use events_queries::{GetEventQuery, ListEventsQuery};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct GetEventQueryHandler {
    events: Arc<dyn EventStore>,
}

impl GetEventQueryHandler {
    pub fn new(events: Arc<dyn EventStore>) -> Self { Self { events } }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, query: GetEventQuery,
    ) -> Result<Event, EventError> {
        self.events.find_by_id(query.event_id).await
    }
}

#[derive(Clone)]
pub struct ListEventsQueryHandler {
    events: Arc<dyn EventStore>,
}

impl ListEventsQueryHandler {
    pub fn new(events: Arc<dyn EventStore>) -> Self { Self { events } }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, query: ListEventsQuery,
    ) -> Result<Vec<Event>, EventError> {
        let filter = query.filter();
        let events = self.events.list(&filter).await?;

        debug!(count = events.len(), ?filter, "Listed events");
        Ok(events)
    }
}
