use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    response::Json,
    routing::{delete, get, post},
};
use common_errors::AppError;
use events_dao::EventStore;
use events_responses::MessageResponse;
use relationships_command_handlers::{
    AttendEventHandler, RemoveAttendedHandler, SaveEventHandler,
    UnsaveEventHandler,
};
use relationships_commands::{
    AttendEventCommand, RemoveAttendedCommand, SaveEventCommand,
    UnsaveEventCommand,
};
use relationships_dao::RelationshipStore;
use relationships_queries::{
    CheckAttendedQuery, CheckSavedQuery, ListAttendedQuery, ListSavedQuery,
};
use relationships_query_handlers::{
    CheckAttendedQueryHandler, CheckSavedQueryHandler,
    ListAttendedQueryHandler, ListSavedQueryHandler,
};
use relationships_responses::{
    ATTENDANCE_REMOVED, AttendEventResponse, AttendedEventDetails,
    AttendedStatusResponse, EVENT_UNSAVED, SaveEventResponse,
    SavedEventDetails, SavedStatusResponse,
};
use tracing::instrument;
use uuid::Uuid;

#[derive(Clone)]
pub struct RelationshipServices {
    pub save_event: SaveEventHandler,
    pub unsave_event: UnsaveEventHandler,
    pub attend_event: AttendEventHandler,
    pub remove_attended: RemoveAttendedHandler,

    pub check_saved: CheckSavedQueryHandler,
    pub check_attended: CheckAttendedQueryHandler,
    pub list_saved: ListSavedQueryHandler,
    pub list_attended: ListAttendedQueryHandler,
}

impl RelationshipServices {
    pub fn new(
        events: Arc<dyn EventStore>, relationships: Arc<dyn RelationshipStore>,
    ) -> Self {
        Self {
            save_event: SaveEventHandler::new(
                events.clone(),
                relationships.clone(),
            ),
            unsave_event: UnsaveEventHandler::new(relationships.clone()),
            attend_event: AttendEventHandler::new(
                events.clone(),
                relationships.clone(),
            ),
            remove_attended: RemoveAttendedHandler::new(relationships.clone()),
            check_saved: CheckSavedQueryHandler::new(relationships.clone()),
            check_attended: CheckAttendedQueryHandler::new(
                relationships.clone(),
            ),
            list_saved: ListSavedQueryHandler::new(
                events.clone(),
                relationships.clone(),
            ),
            list_attended: ListAttendedQueryHandler::new(events, relationships),
        }
    }
}

pub struct RelationshipHandlers;

impl RelationshipHandlers {
    pub fn routes() -> Router<RelationshipServices> {
        Router::new()
            .route("/api/events/{id}/save", post(save_event))
            .route("/api/events/{id}/attend", post(attend_event))
            .route("/api/saved", get(list_saved))
            .route("/api/saved/{id}", delete(unsave_event))
            .route("/api/saved/check/{id}", get(check_saved))
            .route("/api/attended", get(list_attended))
            .route("/api/attended/{id}", delete(remove_attended))
            .route("/api/attended/check/{id}", get(check_attended))
    }
}

/// Path ids that are not UUIDs cannot name a stored record; `missing`
/// builds the not-found error for the route.
fn parse_event_id(
    raw: &str, missing: fn() -> AppError,
) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw)
        .map_err(|_| missing().with_details(format!("event_id={raw}")))
}

fn event_not_found() -> AppError {
    AppError::not_found("EVENT_NOT_FOUND", "Event not found")
}

fn saved_not_found() -> AppError {
    AppError::not_found("SAVED_EVENT_NOT_FOUND", "Saved event not found")
}

fn attended_not_found() -> AppError {
    AppError::not_found("ATTENDED_EVENT_NOT_FOUND", "Attended event not found")
}

#[utoipa::path(
    post,
    path = "/api/events/{id}/save",
    params(
        ("id" = String, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event saved, or already saved", body = SaveEventResponse),
        (status = 404, description = "Event not found", body = common_errors::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "saved"
)]
#[instrument(skip_all)]
pub async fn save_event(
    State(services): State<RelationshipServices>, Path(id): Path<String>,
) -> Result<Json<SaveEventResponse>, AppError> {
    let command = SaveEventCommand {
        event_id: parse_event_id(&id, event_not_found)?,
    };
    let result = services.save_event.execute(command).await?;

    Ok(Json(result))
}

#[utoipa::path(
    delete,
    path = "/api/saved/{id}",
    params(
        ("id" = String, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event removed from saved", body = MessageResponse),
        (status = 404, description = "Saved event not found", body = common_errors::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "saved"
)]
#[instrument(skip_all)]
pub async fn unsave_event(
    State(services): State<RelationshipServices>, Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let command = UnsaveEventCommand {
        event_id: parse_event_id(&id, saved_not_found)?,
    };
    services.unsave_event.execute(command).await?;

    Ok(Json(MessageResponse::new(EVENT_UNSAVED)))
}

/// Non-UUID ids are simply not saved.
#[utoipa::path(
    get,
    path = "/api/saved/check/{id}",
    params(
        ("id" = String, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Whether the event is saved", body = SavedStatusResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "saved"
)]
#[instrument(skip_all)]
pub async fn check_saved(
    State(services): State<RelationshipServices>, Path(id): Path<String>,
) -> Result<Json<SavedStatusResponse>, AppError> {
    let Ok(event_id) = Uuid::parse_str(&id)
    else {
        return Ok(Json(SavedStatusResponse { is_saved: false }));
    };
    let status = services
        .check_saved
        .execute(CheckSavedQuery { event_id })
        .await?;

    Ok(Json((&status).into()))
}

#[utoipa::path(
    get,
    path = "/api/saved",
    responses(
        (status = 200, description = "Saved events with details, most recent first", body = Vec<SavedEventDetails>),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "saved"
)]
#[instrument(skip_all)]
pub async fn list_saved(
    State(services): State<RelationshipServices>,
) -> Result<Json<Vec<SavedEventDetails>>, AppError> {
    let saved = services.list_saved.execute(ListSavedQuery).await?;
    Ok(Json(saved))
}

#[utoipa::path(
    post,
    path = "/api/events/{id}/attend",
    request_body = AttendEventCommand,
    params(
        ("id" = String, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event marked as attended, or rating updated", body = AttendEventResponse),
        (status = 404, description = "Event not found", body = common_errors::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "attended"
)]
#[instrument(skip_all)]
pub async fn attend_event(
    State(services): State<RelationshipServices>, Path(id): Path<String>,
    Json(mut command): Json<AttendEventCommand>,
) -> Result<Json<AttendEventResponse>, AppError> {
    command.event_id = parse_event_id(&id, event_not_found)?;
    let result = services.attend_event.execute(command).await?;

    Ok(Json(result))
}

#[utoipa::path(
    delete,
    path = "/api/attended/{id}",
    params(
        ("id" = String, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event removed from attended", body = MessageResponse),
        (status = 404, description = "Attended event not found", body = common_errors::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "attended"
)]
#[instrument(skip_all)]
pub async fn remove_attended(
    State(services): State<RelationshipServices>, Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let command = RemoveAttendedCommand {
        event_id: parse_event_id(&id, attended_not_found)?,
    };
    services.remove_attended.execute(command).await?;

    Ok(Json(MessageResponse::new(ATTENDANCE_REMOVED)))
}

#[utoipa::path(
    get,
    path = "/api/attended/check/{id}",
    params(
        ("id" = String, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Whether the event is attended and its rating", body = AttendedStatusResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "attended"
)]
#[instrument(skip_all)]
pub async fn check_attended(
    State(services): State<RelationshipServices>, Path(id): Path<String>,
) -> Result<Json<AttendedStatusResponse>, AppError> {
    let Ok(event_id) = Uuid::parse_str(&id)
    else {
        return Ok(Json(AttendedStatusResponse {
            is_attended: false,
            emoji_rating: None,
        }));
    };
    let status = services
        .check_attended
        .execute(CheckAttendedQuery { event_id })
        .await?;

    Ok(Json((&status).into()))
}

#[utoipa::path(
    get,
    path = "/api/attended",
    responses(
        (status = 200, description = "Attended events with details, most recent first", body = Vec<AttendedEventDetails>),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "attended"
)]
#[instrument(skip_all)]
pub async fn list_attended(
    State(services): State<RelationshipServices>,
) -> Result<Json<Vec<AttendedEventDetails>>, AppError> {
    let attended = services.list_attended.execute(ListAttendedQuery).await?;
    Ok(Json(attended))
}
