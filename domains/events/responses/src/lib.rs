use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EventResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub image: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<events_models::Event> for EventResponse {
    fn from(event: events_models::Event) -> Self {
        Self {
            id: event.id,
            title: event.title,
            description: event.description,
            category: event.category,
            image: event.image,
            date: event.date,
            time: event.time,
            location: event.location,
            created_at: event.created_at,
        }
    }
}

/// Plain confirmation body, e.g. `{"message": "Event deleted successfully"}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SeedEventsResponse {
    pub message: String,
    #[serde(skip)]
    pub seeded: usize,
}

impl SeedEventsResponse {
    pub fn new(seeded: usize) -> Self {
        Self {
            message: format!("Seeded {seeded} events successfully"),
            seeded,
        }
    }
}
