use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use events_dao::{EventDao, EventStore, MemoryEventStore};
use events_http::{EventHandlers, EventServices};
use events_responses::MessageResponse;
use relationships_dao::{
    MemoryRelationshipStore, RelationshipDao, RelationshipStore,
};
use relationships_http::{RelationshipHandlers, RelationshipServices};
use sql_connection::SqlConnect;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

pub mod config;

pub const API_BANNER: &str = "WOW API - Descubre y Vive Eventos";

/// The stores every route works against. `db` is set for the PostgreSQL
/// backend and feeds the health report.
#[derive(Clone)]
pub struct Stores {
    pub events: Arc<dyn EventStore>,
    pub relationships: Arc<dyn RelationshipStore>,
    pub db: Option<SqlConnect>,
}

impl Stores {
    pub fn postgres(db: SqlConnect) -> Self {
        Self {
            events: Arc::new(EventDao::new(db.clone())),
            relationships: Arc::new(RelationshipDao::new(db.clone())),
            db: Some(db),
        }
    }

    pub fn memory() -> Self {
        Self {
            events: Arc::new(MemoryEventStore::new()),
            relationships: Arc::new(MemoryRelationshipStore::new()),
            db: None,
        }
    }
}

pub fn build_app(stores: &Stores) -> Router {
    let event_services = EventServices::new(
        stores.events.clone(),
        stores.relationships.clone(),
    );
    let relationship_services = RelationshipServices::new(
        stores.events.clone(),
        stores.relationships.clone(),
    );

    let api_routes = Router::new()
        .route("/api", get(root))
        .route("/api/", get(root))
        .merge(EventHandlers::routes().with_state(event_services))
        .merge(
            RelationshipHandlers::routes().with_state(relationship_services),
        );

    Router::new()
        .route("/health", get(health_check))
        .with_state(stores.db.clone())
        .merge(api_routes)
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/docs"))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        root,
        health_check,
        events_http::list_events,
        events_http::get_event,
        events_http::create_event,
        events_http::delete_event,
        events_http::seed_events,
        relationships_http::save_event,
        relationships_http::unsave_event,
        relationships_http::check_saved,
        relationships_http::list_saved,
        relationships_http::attend_event,
        relationships_http::remove_attended,
        relationships_http::check_attended,
        relationships_http::list_attended
    ),
    components(
        schemas(
            events_responses::EventResponse,
            events_responses::MessageResponse,
            events_responses::SeedEventsResponse,
            events_http::EventsListParams,
            events_commands::CreateEventCommand,
            relationships_commands::AttendEventCommand,
            relationships_models::SavedEvent,
            relationships_models::AttendedEvent,
            relationships_responses::SaveEventResponse,
            relationships_responses::AttendEventResponse,
            relationships_responses::SavedStatusResponse,
            relationships_responses::AttendedStatusResponse,
            relationships_responses::SavedEventDetails,
            relationships_responses::AttendedEventDetails,
            common_errors::ApiErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "events", description = "Event catalog endpoints"),
        (name = "saved", description = "Saved events"),
        (name = "attended", description = "Attended events and ratings")
    ),
    info(
        title = "WOW API",
        description = "Descubre y Vive Eventos",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

#[utoipa::path(
    get,
    path = "/api/",
    responses(
        (status = 200, description = "API banner", body = MessageResponse)
    ),
    tag = "health"
)]
async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new(API_BANNER))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check with connection pool status", body = String)
    ),
    tag = "health"
)]
async fn health_check(
    State(db): State<Option<SqlConnect>>,
) -> impl IntoResponse {
    let health_info = match db {
        Some(db) => {
            let (available, size) = db.get_pool_status();
            format!("OK - Pool: {available}/{size} available")
        }
        None => "OK - Memory store".to_string(),
    };

    (StatusCode::OK, health_info)
}
