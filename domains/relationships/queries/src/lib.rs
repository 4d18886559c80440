use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CheckSavedQuery {
    pub event_id: Uuid,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CheckAttendedQuery {
    pub event_id: Uuid,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ListSavedQuery;

#[derive(Debug, Clone, Copy, Default)]
pub struct ListAttendedQuery;
