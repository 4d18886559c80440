use events_models::{DEFAULT_CATEGORY, NewEvent};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

fn default_category() -> String { DEFAULT_CATEGORY.to_string() }

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateEventCommand {
    pub title: String,
    /// Missing or null both store an empty description
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_category")]
    pub category: String,
    /// Base64 encoded image
    pub image: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
}

impl From<CreateEventCommand> for NewEvent {
    fn from(command: CreateEventCommand) -> Self {
        Self {
            title: command.title,
            description: command.description.unwrap_or_default(),
            category: command.category,
            image: command.image,
            date: command.date,
            time: command.time,
            location: command.location,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DeleteEventCommand {
    pub event_id: Uuid,
}

/// Wipes the catalog and every relationship, then loads the sample events.
#[derive(Debug, Default)]
pub struct SeedEventsCommand;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_command_defaults() {
        let command: CreateEventCommand =
            serde_json::from_str(r#"{"title": "Comedor Social"}"#).unwrap();
        assert!(command.description.is_none());
        assert_eq!(command.category, "general");
        assert!(command.location.is_none());

        let new_event = NewEvent::from(command);
        assert_eq!(new_event.title, "Comedor Social");
        assert_eq!(new_event.description, "");
    }

    #[test]
    fn create_command_accepts_null_description() {
        let command: CreateEventCommand = serde_json::from_str(
            r#"{"title": "Limpieza de Playa", "description": null}"#,
        )
        .unwrap();

        let new_event = NewEvent::from(command);
        assert_eq!(new_event.description, "");
    }

    #[test]
    fn create_command_keeps_unknown_category() {
        let command: CreateEventCommand = serde_json::from_str(
            r#"{"title": "Taller", "category": "workshop", "time": "10:00"}"#,
        )
        .unwrap();
        assert_eq!(command.category, "workshop");
        assert_eq!(command.time.as_deref(), Some("10:00"));
    }

    #[test]
    fn create_command_requires_title() {
        let result = serde_json::from_str::<CreateEventCommand>(
            r#"{"category": "music"}"#,
        );
        assert!(result.is_err());
    }
}
