use common_errors::AppError;
use events_errors::EventError;
use sql_connection::{PgError, PoolError};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum RelationshipError {
    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: Uuid },
    #[error("Saved event not found: {event_id}")]
    SavedNotFound { event_id: Uuid },
    #[error("Attended event not found: {event_id}")]
    AttendedNotFound { event_id: Uuid },
    #[error("Invalid relationship row for {event_id}: state '{state}'")]
    InvalidRow { event_id: Uuid, state: String },
    #[error("Event store error: {0}")]
    Event(EventError),
    #[error("Database error: {0}")]
    Database(#[from] PgError),
    #[error("Connection error: {0}")]
    Connection(#[from] PoolError),
}

impl From<EventError> for RelationshipError {
    fn from(err: EventError) -> Self {
        match err {
            EventError::NotFound { event_id } => {
                Self::EventNotFound { event_id }
            }
            other => Self::Event(other),
        }
    }
}

impl From<RelationshipError> for AppError {
    fn from(err: RelationshipError) -> Self {
        match err {
            RelationshipError::EventNotFound { event_id } => {
                AppError::not_found("EVENT_NOT_FOUND", "Event not found")
                    .with_details(format!("event_id={event_id}"))
            }
            RelationshipError::SavedNotFound { event_id } => {
                AppError::not_found(
                    "SAVED_EVENT_NOT_FOUND",
                    "Saved event not found",
                )
                .with_details(format!("event_id={event_id}"))
            }
            RelationshipError::AttendedNotFound { event_id } => {
                AppError::not_found(
                    "ATTENDED_EVENT_NOT_FOUND",
                    "Attended event not found",
                )
                .with_details(format!("event_id={event_id}"))
            }
            RelationshipError::InvalidRow { .. } => {
                AppError::storage("INVALID_RELATIONSHIP_ROW", err)
            }
            RelationshipError::Event(event_err) => event_err.into(),
            RelationshipError::Database(db_err) => {
                AppError::storage("DATABASE_ERROR", db_err)
            }
            RelationshipError::Connection(pool_err) => {
                AppError::storage("DATABASE_CONNECTION_ERROR", pool_err)
            }
        }
    }
}
