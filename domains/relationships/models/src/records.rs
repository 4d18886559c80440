use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Bookmark on an event. At most one exists per `event_id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SavedEvent {
    pub id: Uuid,
    pub event_id: Uuid,
    pub saved_at: DateTime<Utc>,
}

/// Attendance record with an optional emoji rating. At most one exists per
/// `event_id`; `attended_at` is the time of the first attendance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AttendedEvent {
    pub id: Uuid,
    pub event_id: Uuid,
    pub emoji_rating: Option<String>,
    pub attended_at: DateTime<Utc>,
}
