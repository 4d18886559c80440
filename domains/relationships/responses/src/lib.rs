use events_responses::EventResponse;
use relationships_models::{
    AttendOutcome, AttendedEvent, RelationshipStatus, SaveOutcome, SavedEvent,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const EVENT_SAVED: &str = "Event saved successfully";
pub const EVENT_ALREADY_SAVED: &str = "Event already saved";
pub const EVENT_UNSAVED: &str = "Event removed from saved";
pub const EVENT_ATTENDED: &str = "Event marked as attended";
pub const ATTENDANCE_UPDATED: &str = "Attendance updated";
pub const ATTENDANCE_REMOVED: &str = "Event removed from attended";

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaveEventResponse {
    pub message: String,
    pub saved: SavedEvent,
}

impl From<SaveOutcome> for SaveEventResponse {
    fn from(outcome: SaveOutcome) -> Self {
        let message = if outcome.is_new() {
            EVENT_SAVED
        }
        else {
            EVENT_ALREADY_SAVED
        };
        Self {
            message: message.to_string(),
            saved: outcome.into_saved(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttendEventResponse {
    pub message: String,
    pub attended: AttendedEvent,
}

impl From<AttendOutcome> for AttendEventResponse {
    fn from(outcome: AttendOutcome) -> Self {
        let message = if outcome.is_new() {
            EVENT_ATTENDED
        }
        else {
            ATTENDANCE_UPDATED
        };
        Self {
            message: message.to_string(),
            attended: outcome.into_attended(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SavedStatusResponse {
    pub is_saved: bool,
}

impl From<&RelationshipStatus> for SavedStatusResponse {
    fn from(status: &RelationshipStatus) -> Self {
        Self {
            is_saved: status.is_saved(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttendedStatusResponse {
    pub is_attended: bool,
    pub emoji_rating: Option<String>,
}

impl From<&RelationshipStatus> for AttendedStatusResponse {
    fn from(status: &RelationshipStatus) -> Self {
        Self {
            is_attended: status.is_attended(),
            emoji_rating: status.emoji_rating().map(str::to_string),
        }
    }
}

/// A saved record joined with the event it points at
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SavedEventDetails {
    pub saved: SavedEvent,
    pub event: EventResponse,
}

/// An attended record joined with the event it points at
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttendedEventDetails {
    pub attended: AttendedEvent,
    pub event: EventResponse,
}
