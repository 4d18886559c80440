use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, Query, State},
    response::Json,
    routing::{get, post},
};
use common_errors::AppError;
use events_command_handlers::{
    CreateEventHandler, DeleteEventHandler, SeedEventsHandler,
};
use events_commands::{
    CreateEventCommand, DeleteEventCommand, SeedEventsCommand,
};
use events_dao::EventStore;
use events_queries::{GetEventQuery, ListEventsQuery};
use events_query_handlers::{GetEventQueryHandler, ListEventsQueryHandler};
use events_responses::{EventResponse, MessageResponse, SeedEventsResponse};
use relationships_dao::RelationshipStore;
use serde::Deserialize;
use tracing::instrument;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Clone)]
pub struct EventServices {
    pub create_event: CreateEventHandler,
    pub delete_event: DeleteEventHandler,
    pub seed_events: SeedEventsHandler,

    pub get_event: GetEventQueryHandler,
    pub list_events: ListEventsQueryHandler,
}

impl EventServices {
    pub fn new(
        events: Arc<dyn EventStore>, relationships: Arc<dyn RelationshipStore>,
    ) -> Self {
        Self {
            create_event: CreateEventHandler::new(events.clone()),
            delete_event: DeleteEventHandler::new(events.clone()),
            seed_events: SeedEventsHandler::new(events.clone(), relationships),
            get_event: GetEventQueryHandler::new(events.clone()),
            list_events: ListEventsQueryHandler::new(events),
        }
    }
}

pub struct EventHandlers;

impl EventHandlers {
    pub fn routes() -> Router<EventServices> {
        Router::new()
            .route("/api/events", get(list_events).post(create_event))
            .route("/api/events/{id}", get(get_event).delete(delete_event))
            .route("/api/seed", post(seed_events))
    }
}

/// A path id that is not a UUID cannot name an event.
fn parse_event_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| {
        AppError::not_found("EVENT_NOT_FOUND", "Event not found")
            .with_details(format!("event_id={raw}"))
    })
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct EventsListParams {
    /// Category to filter by; `all` or empty returns every event
    category: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/events",
    params(EventsListParams),
    responses(
        (status = 200, description = "Events, newest first", body = Vec<EventResponse>),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn list_events(
    State(services): State<EventServices>,
    Query(params): Query<EventsListParams>,
) -> Result<Json<Vec<EventResponse>>, AppError> {
    let query = ListEventsQuery {
        category: params.category,
    };
    let events = services.list_events.execute(query).await?;

    Ok(Json(events.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/events/{id}",
    params(
        ("id" = String, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event found", body = EventResponse),
        (status = 404, description = "Event not found", body = common_errors::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn get_event(
    State(services): State<EventServices>, Path(id): Path<String>,
) -> Result<Json<EventResponse>, AppError> {
    let query = GetEventQuery {
        event_id: parse_event_id(&id)?,
    };
    let event = services.get_event.execute(query).await?;

    Ok(Json(event.into()))
}

#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventCommand,
    responses(
        (status = 200, description = "Event created", body = EventResponse),
        (status = 400, description = "Invalid request data"),
        (status = 422, description = "Missing required fields"),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn create_event(
    State(services): State<EventServices>,
    Json(command): Json<CreateEventCommand>,
) -> Result<Json<EventResponse>, AppError> {
    let event = services.create_event.execute(command).await?;
    Ok(Json(event))
}

#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    params(
        ("id" = String, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event deleted", body = MessageResponse),
        (status = 404, description = "Event not found", body = common_errors::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn delete_event(
    State(services): State<EventServices>, Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let command = DeleteEventCommand {
        event_id: parse_event_id(&id)?,
    };
    services.delete_event.execute(command).await?;

    Ok(Json(MessageResponse::new("Event deleted successfully")))
}

#[utoipa::path(
    post,
    path = "/api/seed",
    responses(
        (status = 200, description = "Catalog reset to the sample events", body = SeedEventsResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn seed_events(
    State(services): State<EventServices>,
) -> Result<Json<SeedEventsResponse>, AppError> {
    let result = services.seed_events.execute(SeedEventsCommand).await?;
    Ok(Json(result))
}
