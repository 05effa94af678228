use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint handler.
///
/// This endpoint should always return 200 if the service is running.
/// It performs no dependency checks.
pub async fn health_handler() -> Response {
    let response = HealthResponse { status: "healthy" };

    (StatusCode::OK, Json(response)).into_response()
}

/// Creates a router with the /health endpoint.
///
/// Use this to add liveness checks to your app.
///
/// # Example
/// ```ignore
/// use axum_helpers::server::health_router;
///
/// let app = api_routes.merge(health_router());
/// ```
pub fn health_router() -> Router {
    Router::new().route("/health", get(health_handler))
}
