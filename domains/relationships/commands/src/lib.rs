use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SaveEventCommand {
    pub event_id: Uuid,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct UnsaveEventCommand {
    pub event_id: Uuid,
}

/// Body of an attend request; `event_id` comes from the path.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AttendEventCommand {
    #[serde(skip)]
    pub event_id: Uuid,
    #[serde(default)]
    pub emoji_rating: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RemoveAttendedCommand {
    pub event_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attend_body_rating_is_optional() {
        let empty: AttendEventCommand = serde_json::from_str("{}").unwrap();
        assert!(empty.emoji_rating.is_none());
        assert!(empty.event_id.is_nil());

        let rated: AttendEventCommand =
            serde_json::from_str(r#"{"emoji_rating": "🎷"}"#).unwrap();
        assert_eq!(rated.emoji_rating.as_deref(), Some("🎷"));
    }
}
