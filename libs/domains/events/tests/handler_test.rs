//! Handler tests for the events domain
//!
//! These tests exercise the HTTP surface over the in-memory repository:
//! status codes, response envelopes, and the deliberately kept behaviors
//! (decode failure responds 500, an empty listing responds 404).

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, Duration, Utc};
use domain_events::{Event, EventService, InMemoryEventRepository, handlers};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn test_app() -> Router {
    let repository = InMemoryEventRepository::new();
    let service = EventService::new(repository);
    handlers::router(service).merge(axum_helpers::server::health_router())
}

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_event(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/events")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn event_payload(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    serde_json::to_string(&json!({
        "title": "Team standup",
        "description": "Daily sync",
        "start_time": start,
        "end_time": end,
    }))
    .unwrap()
}

#[tokio::test]
async fn test_create_event_returns_201_with_full_event() {
    let app = test_app();
    let start = Utc::now();

    let response = app
        .oneshot(post_event(event_payload(start, start + Duration::hours(1))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let event: Event = json_body(response.into_body()).await;
    assert!(!event.id.is_nil());
    assert_eq!(event.id.get_version_num(), 7);
    assert_eq!(event.title, "Team standup");
    assert_eq!(event.description.as_deref(), Some("Daily sync"));
}

#[tokio::test]
async fn test_create_event_empty_title_returns_field_map() {
    let app = test_app();
    let start = Utc::now();

    let body = serde_json::to_string(&json!({
        "title": "",
        "start_time": start,
        "end_time": start + Duration::hours(1),
    }))
    .unwrap();

    let response = app.oneshot(post_event(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let errors: Value = json_body(response.into_body()).await;
    assert_eq!(errors["title"], "Field title is required");
    // Bare field map, no envelope
    assert!(errors.get("error").is_none());
}

#[tokio::test]
async fn test_create_event_missing_times_returns_field_map() {
    let app = test_app();

    let body = serde_json::to_string(&json!({ "title": "No times" })).unwrap();

    let response = app.oneshot(post_event(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let errors: Value = json_body(response.into_body()).await;
    assert_eq!(errors["start_time"], "Field start_time is required");
    assert_eq!(errors["end_time"], "Field end_time is required");
}

#[tokio::test]
async fn test_create_event_end_before_start_returns_400() {
    let app = test_app();
    let start = Utc::now();

    let response = app
        .oneshot(post_event(event_payload(start, start - Duration::hours(1))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let errors: Value = json_body(response.into_body()).await;
    assert_eq!(
        errors["end_time"],
        "Field end_time must be greater than start_time"
    );
}

// Kept behavior: malformed bodies respond 500 with the generic envelope,
// not 400.
#[tokio::test]
async fn test_create_event_malformed_body_returns_500() {
    let app = test_app();

    let response = app
        .oneshot(post_event("{not json".to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = json_body(response.into_body()).await;
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn test_get_event_returns_200() {
    let repository = InMemoryEventRepository::new();
    let service = EventService::new(repository);
    let app = handlers::router(service);

    let start = Utc::now();
    let create_response = app
        .clone()
        .oneshot(post_event(event_payload(start, start + Duration::hours(1))))
        .await
        .unwrap();
    let created: Event = json_body(create_response.into_body()).await;

    let request = Request::builder()
        .method("GET")
        .uri(format!("/events/{}", created.id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let event: Event = json_body(response.into_body()).await;
    assert_eq!(event.id, created.id);
    assert_eq!(event.title, created.title);
}

#[tokio::test]
async fn test_get_event_unknown_id_returns_404_envelope() {
    let app = test_app();
    let missing = uuid::Uuid::now_v7();

    let request = Request::builder()
        .method("GET")
        .uri(format!("/events/{}", missing))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = json_body(response.into_body()).await;
    let message = body["error"].as_str().unwrap();
    assert!(message.contains(&format!("event by id: {} was not found", missing)));
}

#[tokio::test]
async fn test_get_event_malformed_uuid_returns_400() {
    let app = test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/events/not-a-uuid")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert!(body["error"].as_str().unwrap().contains("Invalid UUID"));
}

// Kept behavior: an empty listing responds 404, not an empty array.
#[tokio::test]
async fn test_list_events_empty_returns_404() {
    let app = test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/events")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = json_body(response.into_body()).await;
    assert!(body["error"].as_str().unwrap().contains("no events found"));
}

#[tokio::test]
async fn test_list_events_ordered_by_start_time() {
    let repository = InMemoryEventRepository::new();
    let service = EventService::new(repository);
    let app = handlers::router(service);

    let now = Utc::now();
    // Create the later event first
    for offset in [60, 10] {
        let start = now + Duration::minutes(offset);
        let response = app
            .clone()
            .oneshot(post_event(event_payload(start, start + Duration::hours(1))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let request = Request::builder()
        .method("GET")
        .uri("/events")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let events: Vec<Event> = json_body(response.into_body()).await;
    assert_eq!(events.len(), 2);
    assert!(events[0].start_time < events[1].start_time);
}

#[tokio::test]
async fn test_health_check_returns_healthy() {
    let app = test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({"status": "healthy"}));
}
