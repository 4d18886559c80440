use common_errors::AppError;
use sql_connection::{PgError, PoolError};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("Event not found: {event_id}")]
    NotFound { event_id: Uuid },
    #[error("Database error: {0}")]
    Database(#[from] PgError),
    #[error("Connection error: {0}")]
    Connection(#[from] PoolError),
}

impl From<EventError> for AppError {
    fn from(err: EventError) -> Self {
        match err {
            EventError::NotFound { event_id } => {
                AppError::not_found("EVENT_NOT_FOUND", "Event not found")
                    .with_details(format!("event_id={event_id}"))
            }
            EventError::Database(db_err) => {
                AppError::storage("DATABASE_ERROR", db_err)
            }
            EventError::Connection(pool_err) => {
                AppError::storage("DATABASE_CONNECTION_ERROR", pool_err)
            }
        }
    }
}
