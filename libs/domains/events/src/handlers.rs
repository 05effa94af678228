use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::UuidPath;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::error::{EventError, EventResult};
use crate::models::{CreateEventRequest, Event, NewEvent};
use crate::repository::EventRepository;
use crate::service::EventService;

/// Per-request deadline for service calls. Expiry drops the in-flight
/// repository call and responds with an internal error.
const REQUEST_DEADLINE: Duration = Duration::from_secs(5);

/// Create the events router with all HTTP endpoints
pub fn router<R: EventRepository + 'static>(service: EventService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route("/events/{id}", get(get_event))
        .with_state(shared_service)
}

/// Create a new event.
///
/// Body decode failures are not classified as caller faults: they respond
/// with the generic 500 envelope. Field validation failures respond 400
/// with a bare field-name to message map.
async fn create_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    payload: Result<Json<CreateEventRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            return EventError::internal(format!("failed to decode request body: {}", rejection))
                .into_response();
        }
    };

    let field_errors = request.validation_errors();
    if !field_errors.is_empty() {
        tracing::info!(?field_errors, "Rejected create event request");
        return (StatusCode::BAD_REQUEST, Json(field_errors)).into_response();
    }

    // Both times are present once validation passed
    let (Some(start_time), Some(end_time)) = (request.start_time, request.end_time) else {
        return EventError::internal("event times missing after validation").into_response();
    };

    let input = NewEvent {
        title: request.title,
        description: request.description,
        start_time,
        end_time,
        created_at: Utc::now(),
    };

    match timeout(REQUEST_DEADLINE, service.create_event(input)).await {
        Ok(Ok(event)) => (StatusCode::CREATED, Json(event)).into_response(),
        Ok(Err(err)) => err.into_response(),
        Err(_) => EventError::internal("create event deadline exceeded").into_response(),
    }
}

/// Get an event by id
async fn get_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    UuidPath(id): UuidPath,
) -> EventResult<Json<Event>> {
    let event = timeout(REQUEST_DEADLINE, service.get_event(id))
        .await
        .map_err(|_| EventError::internal("get event deadline exceeded"))??;

    Ok(Json(event))
}

/// List all events, ordered by start_time ascending
async fn list_events<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
) -> EventResult<Json<Vec<Event>>> {
    let events = timeout(REQUEST_DEADLINE, service.get_all_events())
        .await
        .map_err(|_| EventError::internal("list events deadline exceeded"))??;

    Ok(Json(events))
}
